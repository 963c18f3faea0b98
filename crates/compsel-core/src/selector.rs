//! The parsed form of a component selector.

use serde::Serialize;

use crate::matcher::matches_component_attribute;
use crate::predicate::AttributePredicate;
use crate::property::PropertyBag;

/// A component-name filter plus the predicates that must all hold.
///
/// # Example
///
/// ```
/// use compsel_core::{AttributePredicate, Comparison, ParsedSelector};
/// use serde_json::json;
///
/// let enabled = AttributePredicate::new(vec![String::from("enabled")], Comparison::Truthy, true)
///     .expect("non-empty path");
/// let selector = ParsedSelector::new(String::from("app-button"), vec![enabled]);
///
/// assert!(selector.matches(Some("app-button"), Some(&json!({"enabled": true}))));
/// assert!(!selector.matches(Some("app-card"), Some(&json!({"enabled": true}))));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSelector {
    /// Component-name filter; empty matches any name.
    name: String,
    /// Predicates in evaluation order.
    attributes: Vec<AttributePredicate>,
}

impl ParsedSelector {
    /// Creates a selector from its parts.
    #[must_use]
    pub const fn new(name: String, attributes: Vec<AttributePredicate>) -> Self {
        Self { name, attributes }
    }

    /// Returns the component-name filter.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the predicates in evaluation order.
    #[must_use]
    pub fn attributes(&self) -> &[AttributePredicate] {
        &self.attributes
    }

    /// Returns whether a component with `name` and `properties` satisfies the
    /// selector.
    ///
    /// Evaluation stops at the first predicate that fails.
    #[must_use]
    pub fn matches<P>(&self, name: Option<&str>, properties: Option<&P>) -> bool
    where
        P: PropertyBag + ?Sized,
    {
        if !self.name.is_empty() && name != Some(self.name.as_str()) {
            return false;
        }
        self.attributes
            .iter()
            .all(|predicate| matches_component_attribute(properties, predicate))
    }
}
