//! Core data model, matcher, and diagnostics for component selectors.
//!
//! A component selector such as `app-root[title*="ang"][user.active]` names
//! a component and lists attribute predicates that must all hold against the
//! component's properties. This crate defines the parsed representation,
//! evaluates it against any [`PropertyBag`], and describes parse failures. The
//! parser lives in `compsel_parser`; both are re-exported by the `compsel`
//! facade.
//!
//! # Core types
//!
//! - [`ParsedSelector`]: name filter plus predicates
//! - [`AttributePredicate`], [`Comparison`], [`Operator`] and
//!   [`PredicateValue`]: one bracketed clause
//! - [`SelectorRegex`]: a `/source/flags` value
//! - [`PropertyBag`] and [`PropertyKind`]: the objects predicates inspect
//! - [`SelectorError`], [`Diagnostic`] and [`DiagnosticCode`]: failures
//! - [`EngineConfig`]: parsing options
//!
//! # Example
//!
//! ```
//! use compsel_core::{AttributePredicate, Comparison, matches_component_attribute};
//! use serde_json::json;
//!
//! let predicate = AttributePredicate::new(
//!     vec![String::from("lang")],
//!     Comparison::DashPrefix(String::from("en")),
//!     true,
//! )
//! .expect("non-empty path");
//! assert!(matches_component_attribute(Some(&json!({"lang": "en-GB"})), &predicate));
//! ```

mod config;
mod diagnostic;
mod error;
mod matcher;
mod pattern;
mod predicate;
mod property;
mod selector;

pub use config::EngineConfig;
pub use diagnostic::{Diagnostic, DiagnosticCode, SourceSpan};
pub use error::{ErrorClass, ParseStage, SelectorError};
pub use matcher::{matches_attribute_part, matches_component_attribute, resolve_path};
pub use pattern::{REGEX_FLAG_CHARS, SelectorRegex, is_regex_flag};
pub use predicate::{AttributePredicate, Comparison, Operator, PredicateValue};
pub use property::{PropertyBag, PropertyKind};
pub use selector::ParsedSelector;

#[cfg(test)]
mod tests;
