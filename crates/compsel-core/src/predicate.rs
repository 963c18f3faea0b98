//! Attribute predicates: one bracketed `[path op value]` clause of a selector.
//!
//! The operator and its operand are held together in a [`Comparison`] so the
//! only operator able to carry a number, boolean or regular expression is
//! equality. Every other operator holds a string by construction.

use std::fmt;

use serde::Serialize;

use crate::pattern::SelectorRegex;

/// Operator of an attribute predicate.
///
/// # Example
///
/// ```
/// use compsel_core::Operator;
///
/// assert_eq!(Operator::DashPrefix.to_string(), "|=");
/// assert_eq!(Operator::Truthy.to_string(), "<truthy>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `[path]`: the resolved property is truthy.
    Truthy,
    /// `=`: strict equality, or a regular-expression test.
    Equals,
    /// `*=`: substring test.
    Contains,
    /// `^=`: prefix test.
    StartsWith,
    /// `$=`: suffix test.
    EndsWith,
    /// `|=`: exact match or prefix followed by `-`.
    DashPrefix,
    /// `~=`: whole space-separated token.
    TokenMatch,
}

impl Operator {
    /// Returns the selector token for this operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truthy => "<truthy>",
            Self::Equals => "=",
            Self::Contains => "*=",
            Self::StartsWith => "^=",
            Self::EndsWith => "$=",
            Self::DashPrefix => "|=",
            Self::TokenMatch => "~=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal operand written in a selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PredicateValue {
    /// A quoted string, or an unquoted token in string mode.
    String(String),
    /// An unquoted numeric literal.
    Number(f64),
    /// The unquoted tokens `true` and `false`.
    Boolean(bool),
    /// A `/source/flags` literal.
    Regex(SelectorRegex),
}

impl fmt::Display for PredicateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => f.write_str(text),
            Self::Number(number) if number.is_infinite() => {
                f.write_str(if number.is_sign_negative() {
                    "-Infinity"
                } else {
                    "Infinity"
                })
            }
            Self::Number(number) => write!(f, "{number}"),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::Regex(regex) => write!(f, "{regex}"),
        }
    }
}

/// Operator and operand of a predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Comparison {
    /// The property is truthy.
    Truthy,
    /// The property equals (or, for a regex, matches) the value.
    Equals(PredicateValue),
    /// The property contains the string.
    Contains(String),
    /// The property starts with the string.
    StartsWith(String),
    /// The property ends with the string.
    EndsWith(String),
    /// The property equals the string or starts with it followed by `-`.
    DashPrefix(String),
    /// The string is one of the property's space-separated tokens.
    TokenMatch(String),
}

impl Comparison {
    /// Builds a comparison for an operator and a parsed operand.
    ///
    /// Returns the operand back when the operator cannot accept it: only
    /// [`Operator::Equals`] takes non-string values, and [`Operator::Truthy`]
    /// takes none.
    ///
    /// # Errors
    ///
    /// Returns the rejected value when the pairing is illegal.
    pub fn new(operator: Operator, value: PredicateValue) -> Result<Self, PredicateValue> {
        let text = match (operator, value) {
            (Operator::Equals, value) => return Ok(Self::Equals(value)),
            (Operator::Truthy, value) => return Err(value),
            (_, PredicateValue::String(text)) => text,
            (_, value) => return Err(value),
        };
        Ok(match operator {
            Operator::Contains => Self::Contains(text),
            Operator::StartsWith => Self::StartsWith(text),
            Operator::EndsWith => Self::EndsWith(text),
            Operator::DashPrefix => Self::DashPrefix(text),
            Operator::TokenMatch => Self::TokenMatch(text),
            Operator::Truthy | Operator::Equals => {
                return Err(PredicateValue::String(text));
            }
        })
    }

    /// Returns the operator of this comparison.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::Truthy => Operator::Truthy,
            Self::Equals(_) => Operator::Equals,
            Self::Contains(_) => Operator::Contains,
            Self::StartsWith(_) => Operator::StartsWith,
            Self::EndsWith(_) => Operator::EndsWith,
            Self::DashPrefix(_) => Operator::DashPrefix,
            Self::TokenMatch(_) => Operator::TokenMatch,
        }
    }

    /// Returns the operand, or `None` for a truthiness test.
    #[must_use]
    pub fn value(&self) -> Option<PredicateValue> {
        match self {
            Self::Truthy => None,
            Self::Equals(value) => Some(value.clone()),
            Self::Contains(text)
            | Self::StartsWith(text)
            | Self::EndsWith(text)
            | Self::DashPrefix(text)
            | Self::TokenMatch(text) => Some(PredicateValue::String(text.clone())),
        }
    }
}

/// One `[path op value]` clause of a selector.
///
/// # Example
///
/// ```
/// use compsel_core::{AttributePredicate, Comparison, Operator};
///
/// let predicate = AttributePredicate::new(
///     vec![String::from("user"), String::from("name")],
///     Comparison::StartsWith(String::from("Ad")),
///     true,
/// )
/// .expect("non-empty path");
/// assert_eq!(predicate.name(), "user.name");
/// assert_eq!(predicate.operator(), Operator::StartsWith);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributePredicate {
    /// Path as written, segments joined by `.`.
    name: String,
    /// Property names to descend through, left to right.
    json_path: Vec<String>,
    /// Operator and operand.
    comparison: Comparison,
    /// Whether string comparisons respect case.
    case_sensitive: bool,
}

impl AttributePredicate {
    /// Creates a predicate over `json_path`.
    ///
    /// Returns `None` when the path is empty.
    #[must_use]
    pub fn new(json_path: Vec<String>, comparison: Comparison, case_sensitive: bool) -> Option<Self> {
        if json_path.is_empty() {
            return None;
        }
        Some(Self {
            name: json_path.join("."),
            json_path,
            comparison,
            case_sensitive,
        })
    }

    /// Returns the display name of the path.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property path segments.
    #[must_use]
    pub fn json_path(&self) -> &[String] {
        &self.json_path
    }

    /// Returns the comparison applied to the resolved property.
    #[must_use]
    pub const fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.comparison.operator()
    }

    /// Returns the operand, or `None` for a truthiness test.
    #[must_use]
    pub fn value(&self) -> Option<PredicateValue> {
        self.comparison.value()
    }

    /// Returns whether string comparisons respect case.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}
