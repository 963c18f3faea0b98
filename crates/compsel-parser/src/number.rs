//! Conversion of unquoted attribute values to numbers.
//!
//! Follows the string-to-number rules of scripting engines: signed decimal
//! literals with optional fraction and exponent, signed `Infinity`, and
//! unsigned `0x`, `0o` and `0b` integers.

/// Parses `token` as a numeric literal, returning `None` when it is not one.
pub(crate) fn parse_numeric_literal(token: &str) -> Option<f64> {
    if let Some(number) = parse_radix_integer(token) {
        return Some(number);
    }

    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }
    token.parse().ok()
}

#[expect(
    clippy::float_arithmetic,
    reason = "radix literals may exceed every integer type before they overflow f64"
)]
fn parse_radix_integer(token: &str) -> Option<f64> {
    let (radix, digits) = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| token.strip_prefix(prefix).map(|digits| (radix, digits)))?;
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

fn is_decimal_literal(text: &str) -> bool {
    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (text, None),
    };

    let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = all_digits(integral)
        && all_digits(fraction)
        && !(integral.is_empty() && fraction.is_empty());

    let exponent_ok = exponent.is_none_or(|exponent| {
        let digits = exponent
            .strip_prefix(['+', '-'])
            .unwrap_or(exponent);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
