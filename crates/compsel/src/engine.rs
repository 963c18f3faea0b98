//! The query entrypoint.
//!
//! The [`Engine`] parses a selector once per query and then filters the
//! records of a [`ComponentCollector`], keeping every record whose name and
//! properties satisfy the selector. Results are the distinct backing
//! elements of the accepted records in first-seen order.

use std::collections::HashSet;
use std::hash::Hash;

use compsel_core::{EngineConfig, ParsedSelector, PropertyBag, SelectorError};
use compsel_parser::SelectorParser;
use tracing::debug;

use crate::collector::{ComponentCollector, ComponentRecord};

const QUERY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::query");

/// Parses selectors and runs them against collected components.
///
/// # Example
///
/// ```
/// use compsel::{ComponentRecord, Engine, EngineConfig};
/// use serde_json::json;
///
/// let records = vec![
///     ComponentRecord::new(Some(String::from("todo-item")), Some(json!({"done": true})), 1),
///     ComponentRecord::new(Some(String::from("todo-item")), Some(json!({"done": false})), 2),
/// ];
/// let engine = Engine::new(EngineConfig::default());
/// assert_eq!(engine.filter("todo-item[done]", &records)?, [1]);
/// # Ok::<(), compsel::SelectorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    parser: SelectorParser,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        let parser = SelectorParser::from_config(&config);
        Self { config, parser }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses `selector` using the configured unquoted-value mode.
    ///
    /// # Errors
    ///
    /// Returns the [`SelectorError`] raised by the parser.
    pub fn parse(&self, selector: &str) -> Result<ParsedSelector, SelectorError> {
        self.parser
            .parse(selector)
            .inspect(|parsed| {
                debug!(
                    target: QUERY_TARGET,
                    selector,
                    name = parsed.name(),
                    predicates = parsed.attributes().len(),
                    "parsed selector"
                );
            })
            .inspect_err(|err| {
                debug!(
                    target: QUERY_TARGET,
                    selector,
                    code = %err.code(),
                    "rejected selector"
                );
            })
    }

    /// Parses `selector` and returns the distinct elements of the matching
    /// `records`.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] when `selector` does not parse. No record
    /// is inspected in that case.
    pub fn filter<E, P>(
        &self,
        selector: &str,
        records: &[ComponentRecord<E, P>],
    ) -> Result<Vec<E>, SelectorError>
    where
        E: Clone + Eq + Hash,
        P: PropertyBag,
    {
        let parsed = self.parse(selector)?;
        Ok(select_elements(&parsed, records))
    }

    /// Collects the components under `scope` and returns the distinct
    /// elements matched by `selector`.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] when `selector` does not parse. The
    /// collector is not invoked in that case.
    pub fn query_all<C>(
        &self,
        collector: &C,
        scope: &C::Scope,
        selector: &str,
    ) -> Result<Vec<C::Element>, SelectorError>
    where
        C: ComponentCollector,
    {
        let parsed = self.parse(selector)?;
        let records = collector.collect(scope);
        Ok(select_elements(&parsed, &records))
    }
}

/// Returns the elements of the records accepted by `selector`.
///
/// A record is accepted when the name filter is empty or equals the record
/// name and every predicate holds against the record's properties. Each
/// element appears once, at the position of its first accepted record.
#[must_use]
pub fn select_elements<E, P>(selector: &ParsedSelector, records: &[ComponentRecord<E, P>]) -> Vec<E>
where
    E: Clone + Eq + Hash,
    P: PropertyBag,
{
    let mut seen = HashSet::new();
    let elements: Vec<E> = records
        .iter()
        .filter(|record| selector.matches(record.name(), record.properties()))
        .map(ComponentRecord::element)
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect();

    debug!(
        target: QUERY_TARGET,
        scanned = records.len(),
        matched = elements.len(),
        "query complete"
    );
    elements
}
