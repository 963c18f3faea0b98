//! Property bags: the host objects predicates are evaluated against.
//!
//! A property bag can look up a named field and describe its own scalar
//! shape. A missing field and a value that cannot be looked into both yield
//! `None`; neither is an error.

use serde_json::Value;

/// The shape of a resolved property as seen by the matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind<'a> {
    /// An explicit null.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A number. Integers beyond 2^53 are rounded to the nearest `f64`.
    Number(f64),
    /// A string.
    String(&'a str),
    /// An object, array or other structured value.
    Compound,
}

impl PropertyKind<'_> {
    /// Returns whether the value is truthy.
    ///
    /// Empty strings, zero, `NaN`, `false` and null are falsy; compound
    /// values are always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match *self {
            Self::Null => false,
            Self::Boolean(flag) => flag,
            Self::Number(number) => number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Compound => true,
        }
    }
}

/// A value that exposes named properties.
pub trait PropertyBag {
    /// Looks up the property `name`.
    ///
    /// Returns `None` when the property is absent or the value is not
    /// lookup-capable.
    fn property(&self, name: &str) -> Option<&Self>;

    /// Describes this value.
    fn kind(&self) -> PropertyKind<'_>;
}

impl PropertyBag for Value {
    fn property(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Object(members) => members.get(name),
            Self::Array(items) => index_of(name).and_then(|index| items.get(index)),
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => None,
        }
    }

    fn kind(&self) -> PropertyKind<'_> {
        match self {
            Self::Null => PropertyKind::Null,
            Self::Bool(flag) => PropertyKind::Boolean(*flag),
            Self::Number(number) => number
                .as_f64()
                .map_or(PropertyKind::Compound, PropertyKind::Number),
            Self::String(text) => PropertyKind::String(text),
            Self::Array(_) | Self::Object(_) => PropertyKind::Compound,
        }
    }
}

/// Parses a canonical array index (`0`, `17`; not `01` or `+1`).
fn index_of(name: &str) -> Option<usize> {
    let canonical = name == "0" || (!name.starts_with('0') && name.bytes().all(|b| b.is_ascii_digit()));
    if canonical { name.parse().ok() } else { None }
}
