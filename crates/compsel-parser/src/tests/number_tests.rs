//! Tests for unquoted numeric literals.

use rstest::rstest;

use crate::number::parse_numeric_literal;

#[rstest]
#[case::zero("0", 0.0)]
#[case::leading_zeros("007", 7.0)]
#[case::trailing_dot("5.", 5.0)]
#[case::leading_dot("-.25", -0.25)]
#[case::upper_exponent("1E2", 100.0)]
#[case::plus_exponent("1e+2", 100.0)]
#[case::upper_hex("0XFF", 255.0)]
#[case::upper_binary("0B11", 3.0)]
#[case::plus_infinity("+Infinity", f64::INFINITY)]
fn accepted(#[case] token: &str, #[case] expected: f64) {
    assert_eq!(parse_numeric_literal(token), Some(expected));
}

#[rstest]
#[case::word("abc")]
#[case::nan("NaN")]
#[case::lower_infinity("infinity")]
#[case::rust_inf("inf")]
#[case::lone_dot(".")]
#[case::lone_sign("-")]
#[case::bare_exponent("e5")]
#[case::empty_exponent("1e")]
#[case::fractional_exponent("1e2.5")]
#[case::underscore("1_000")]
#[case::signed_hex("-0x10")]
#[case::empty_hex("0x")]
#[case::bad_hex_digit("0xG")]
#[case::bad_octal_digit("0o8")]
#[case::double_sign("+-1")]
#[case::non_ascii_digit("١")]
fn rejected(#[case] token: &str) {
    assert_eq!(parse_numeric_literal(token), None);
}
