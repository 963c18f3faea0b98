//! Compsel: selector queries over trees of component instances.
//!
//! This facade crate re-exports the stable types from [`compsel_core`] and
//! [`compsel_parser`] and provides the [`Engine`] entrypoint, which parses a
//! selector once and filters the records produced by a
//! [`ComponentCollector`] down to the distinct elements whose components
//! match.
//!
//! # Core types
//!
//! - [`Engine`]: parsing and query entrypoint
//! - [`ComponentRecord`] and [`ComponentCollector`]: discovered components
//! - [`ComponentSnapshot`] and [`SnapshotCollector`]: an in-memory tree
//! - [`ParsedSelector`] and [`AttributePredicate`]: parsed selectors
//! - [`SelectorError`] and [`Diagnostic`]: parse failures
//! - [`EngineConfig`]: parsing options
//!
//! # Example
//!
//! ```
//! use compsel::{ComponentSnapshot, Engine, EngineConfig, SnapshotCollector};
//! use serde_json::json;
//!
//! let tree = ComponentSnapshot::new("APP-ROOT", "root")
//!     .with_component(json!({"title": "angular"}))
//!     .with_child(ComponentSnapshot::new("span", "label"));
//!
//! let engine = Engine::new(EngineConfig::default());
//! let found = engine.query_all(&SnapshotCollector, &tree, r#"app-root[title*="ang"]"#)?;
//! assert_eq!(found, ["root"]);
//! # Ok::<(), compsel::SelectorError>(())
//! ```

mod collector;
mod engine;
mod snapshot;

pub use compsel_core::{
    AttributePredicate, Comparison, Diagnostic, DiagnosticCode, EngineConfig, ErrorClass,
    Operator, ParseStage, ParsedSelector, PredicateValue, PropertyBag, PropertyKind,
    SelectorError, SelectorRegex, SourceSpan, matches_attribute_part,
    matches_component_attribute,
};
pub use compsel_parser::{SelectorParser, parse_selector};

pub use collector::{ComponentCollector, ComponentRecord};
pub use engine::{Engine, select_elements};
pub use snapshot::{ComponentSnapshot, SnapshotCollector};

#[cfg(test)]
mod tests;
