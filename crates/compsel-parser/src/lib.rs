//! Hand-written parser for component selectors.
//!
//! Turns text such as `app-list[items.0.'display name'^="Ad"i][open=true]`
//! into a [`ParsedSelector`](compsel_core::ParsedSelector). Parsing is
//! deterministic and all-or-nothing: the first malformed token aborts with a
//! [`SelectorError`](compsel_core::SelectorError) that names the selector, the
//! offending character (or end of input), its position and the parser stage.
//!
//! Unquoted values are numbers by default. A [`SelectorParser`] built with
//! `allow_unquoted_strings` keeps them as strings instead; `true` and `false`
//! are booleans in both modes.
//!
//! # Example
//!
//! ```
//! use compsel_core::{Comparison, PredicateValue};
//! use compsel_parser::parse_selector;
//!
//! let selector = parse_selector("x[a.b=1]", false)?;
//! let predicate = &selector.attributes()[0];
//! assert_eq!(predicate.json_path(), ["a", "b"]);
//! assert_eq!(predicate.comparison(), &Comparison::Equals(PredicateValue::Number(1.0)));
//! # Ok::<(), compsel_core::SelectorError>(())
//! ```

mod cursor;
mod number;
mod parser;

pub use parser::{SelectorParser, parse_selector};

#[cfg(test)]
mod tests;
