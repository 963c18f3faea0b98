//! Evaluation of attribute predicates against property bags.
//!
//! The matcher is total: missing properties, non-lookup-capable values and
//! operand type mismatches all evaluate to `false`.

use std::borrow::Cow;

use crate::predicate::{AttributePredicate, Comparison, PredicateValue};
use crate::property::{PropertyBag, PropertyKind};

/// Walks `path` from `root`.
///
/// Resolution stops at the first absent segment and yields `None`.
///
/// # Example
///
/// ```
/// use compsel_core::resolve_path;
/// use serde_json::json;
///
/// let props = json!({"user": {"roles": ["admin"]}});
/// let path = [String::from("user"), String::from("roles"), String::from("0")];
/// assert_eq!(resolve_path(Some(&props), &path), Some(&json!("admin")));
/// ```
#[must_use]
pub fn resolve_path<'a, P>(root: Option<&'a P>, path: &[String]) -> Option<&'a P>
where
    P: PropertyBag + ?Sized,
{
    path.iter()
        .try_fold(root?, |current, segment| current.property(segment))
}

/// Resolves the predicate's path from `root` and evaluates it.
#[must_use]
pub fn matches_component_attribute<P>(root: Option<&P>, predicate: &AttributePredicate) -> bool
where
    P: PropertyBag + ?Sized,
{
    let subject = resolve_path(root, predicate.json_path()).map(PropertyBag::kind);
    matches_attribute_part(subject, predicate)
}

/// Evaluates a predicate against an already resolved subject.
///
/// `None` stands for an absent property.
#[must_use]
pub fn matches_attribute_part(subject: Option<PropertyKind<'_>>, predicate: &AttributePredicate) -> bool {
    let case_sensitive = predicate.case_sensitive();
    let strings = |operand: &str, test: fn(&str, &str) -> bool| match subject {
        Some(PropertyKind::String(text)) => {
            test(&fold(text, case_sensitive), &fold(operand, case_sensitive))
        }
        _ => false,
    };

    match predicate.comparison() {
        Comparison::Truthy => subject.is_some_and(|kind| kind.is_truthy()),
        Comparison::Equals(value) => subject.is_some_and(|kind| equals(kind, value, case_sensitive)),
        Comparison::Contains(needle) => strings(needle, |haystack, needle| haystack.contains(needle)),
        Comparison::StartsWith(prefix) => {
            strings(prefix, |haystack, prefix| haystack.starts_with(prefix))
        }
        Comparison::EndsWith(suffix) => strings(suffix, |haystack, suffix| haystack.ends_with(suffix)),
        Comparison::DashPrefix(tag) => strings(tag, |haystack, tag| {
            haystack
                .strip_prefix(tag)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
        }),
        Comparison::TokenMatch(token) => strings(token, |haystack, token| {
            haystack.split(' ').any(|candidate| candidate == token)
        }),
    }
}

/// Upper-cases `text` unless comparisons are case-sensitive.
fn fold(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_uppercase())
    }
}

#[expect(clippy::float_cmp, reason = "numeric operands use strict equality")]
fn equals(kind: PropertyKind<'_>, value: &PredicateValue, case_sensitive: bool) -> bool {
    match (kind, value) {
        (PropertyKind::String(text), PredicateValue::Regex(regex)) => {
            regex.is_match(&fold(text, case_sensitive))
        }
        (PropertyKind::String(text), PredicateValue::String(expected)) => {
            fold(text, case_sensitive) == fold(expected, case_sensitive)
        }
        (PropertyKind::Number(number), PredicateValue::Number(expected)) => number == *expected,
        (PropertyKind::Boolean(flag), PredicateValue::Boolean(expected)) => flag == *expected,
        _ => false,
    }
}
