//! Regular-expression literals used as predicate values.
//!
//! Selectors accept values written as `/source/flags`. The flag alphabet is
//! the one used by mainstream scripting engines (`d g i m s u y`); only the
//! flags that change the outcome of a boolean test are mapped onto the
//! compiled [`Regex`]. Backreferences and look-around are supported.

use std::fmt;

use fancy_regex::Regex;
use serde::{Serialize, Serializer};

/// Flags accepted after the closing `/` of a regular-expression literal.
pub const REGEX_FLAG_CHARS: &str = "dgimsuy";

/// Returns whether `c` is a recognised regular-expression flag.
#[must_use]
pub fn is_regex_flag(c: char) -> bool {
    REGEX_FLAG_CHARS.contains(c)
}

/// A compiled regular-expression literal together with its written form.
///
/// Two values compare equal when their source and flags are identical; the
/// compiled automaton takes no part in equality.
///
/// # Example
///
/// ```
/// use compsel_core::SelectorRegex;
///
/// let re = SelectorRegex::new("^ab+c$", "i")?;
/// assert!(re.is_match("ABBC"));
/// assert_eq!(re.to_string(), "/^ab+c$/i");
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone)]
pub struct SelectorRegex {
    source: String,
    flags: String,
    sticky: bool,
    regex: Regex,
}

impl SelectorRegex {
    /// Compiles `source` with the given flag string.
    ///
    /// # Errors
    ///
    /// Returns the engine's complaint when a flag is unknown or repeated, or
    /// when the pattern does not compile.
    pub fn new(source: &str, flags: &str) -> Result<Self, String> {
        let mut seen = String::with_capacity(flags.len());
        for flag in flags.chars() {
            if !is_regex_flag(flag) || seen.contains(flag) {
                return Err(format!("invalid regular expression flags '{flags}'"));
            }
            seen.push(flag);
        }

        let inline: String = flags.chars().filter(|flag| "ims".contains(*flag)).collect();
        let pattern = if inline.is_empty() {
            source.to_owned()
        } else {
            format!("(?{inline}){source}")
        };
        let regex = Regex::new(&pattern)
            .map_err(|err| format!("invalid regular expression /{source}/{flags}: {err}"))?;

        Ok(Self {
            source: source.to_owned(),
            flags: flags.to_owned(),
            sticky: flags.contains('y'),
            regex,
        })
    }

    /// Returns the pattern text between the slashes.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the flags as written.
    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Tests `subject` against the pattern.
    ///
    /// A sticky (`y`) pattern only matches at the start of the subject. A
    /// match that exceeds the backtracking limit counts as no match.
    #[must_use]
    pub fn is_match(&self, subject: &str) -> bool {
        if self.sticky {
            return self
                .regex
                .find(subject)
                .ok()
                .flatten()
                .is_some_and(|found| found.start() == 0);
        }
        self.regex.is_match(subject).unwrap_or(false)
    }
}

impl PartialEq for SelectorRegex {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for SelectorRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl Serialize for SelectorRegex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
