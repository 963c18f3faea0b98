//! Discovered component records and the collectors that produce them.

use std::hash::Hash;

use compsel_core::PropertyBag;

/// One component discovered while walking a tree.
///
/// `element` identifies the visual element backing the component. Several
/// records may share an element; queries report each element once.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord<E, P> {
    name: Option<String>,
    properties: Option<P>,
    element: E,
}

impl<E, P> ComponentRecord<E, P> {
    /// Creates a record.
    ///
    /// `properties` is whichever state object the collector designates for
    /// matching, typically the component's own state or that of the nearest
    /// enclosing component.
    #[must_use]
    pub const fn new(name: Option<String>, properties: Option<P>, element: E) -> Self {
        Self {
            name,
            properties,
            element,
        }
    }

    /// Returns the component name, if the record has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the properties used for matching.
    #[must_use]
    pub const fn properties(&self) -> Option<&P> {
        self.properties.as_ref()
    }

    /// Returns the backing element.
    #[must_use]
    pub const fn element(&self) -> &E {
        &self.element
    }
}

/// Produces component records from some scope.
///
/// Implementations decide how a tree is walked and which state object each
/// record carries. Records must be returned in a stable document order so
/// that query results are deterministic.
pub trait ComponentCollector {
    /// The root a walk starts from.
    type Scope: ?Sized;
    /// Identity of a visual element.
    type Element: Clone + Eq + Hash;
    /// The state objects predicates are evaluated against.
    type Properties: PropertyBag;

    /// Collects every component record under `scope`.
    fn collect(&self, scope: &Self::Scope) -> Vec<ComponentRecord<Self::Element, Self::Properties>>;
}
