//! An in-memory component tree that can be queried directly.
//!
//! A [`ComponentSnapshot`] records a tree of elements, the component state
//! attached to some of them, and optional nested sub-trees such as shadow
//! roots. Snapshots deserialise from JSON:
//!
//! ```json
//! {
//!   "tag": "app-root",
//!   "id": "root",
//!   "component": {"title": "angular"},
//!   "children": [{"tag": "span", "id": "label"}],
//!   "shadow": []
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collector::{ComponentCollector, ComponentRecord};

/// One element of a component tree together with its descendants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    tag: String,
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    component: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    shadow: Vec<Self>,
}

impl ComponentSnapshot {
    /// Creates an element with no component state and no descendants.
    #[must_use]
    pub fn new(tag: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: id.into(),
            component: None,
            children: Vec::new(),
            shadow: Vec::new(),
        }
    }

    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the deserialisation error when `json` is not a snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Attaches component state to this element.
    #[must_use]
    pub fn with_component(mut self, state: Value) -> Self {
        self.component = Some(state);
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a top-level element of the nested sub-tree.
    #[must_use]
    pub fn with_shadow_child(mut self, child: Self) -> Self {
        self.shadow.push(child);
        self
    }

    /// Returns the tag name as written.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the component state attached to this element.
    #[must_use]
    pub const fn component(&self) -> Option<&Value> {
        self.component.as_ref()
    }

    /// Returns the child elements.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the top-level elements of the nested sub-tree.
    #[must_use]
    pub fn shadow(&self) -> &[Self] {
        &self.shadow
    }

    /// Lists one record per element in pre-order.
    ///
    /// Each element's nested sub-tree is listed straight after the element
    /// and before its children. Names are lower-cased tags. An element
    /// without component state carries the state of its nearest ancestor
    /// that has one.
    #[must_use]
    pub fn records(&self) -> Vec<ComponentRecord<String, Value>> {
        let mut records = Vec::new();
        self.walk(None, &mut records);
        records
    }

    fn walk(&self, owner: Option<&Value>, records: &mut Vec<ComponentRecord<String, Value>>) {
        let properties = self.component.as_ref().or(owner);
        records.push(ComponentRecord::new(
            Some(self.tag.to_lowercase()),
            properties.cloned(),
            self.id.clone(),
        ));
        for node in self.shadow.iter().chain(&self.children) {
            node.walk(properties, records);
        }
    }
}

/// Collects records from a [`ComponentSnapshot`].
///
/// Elements are identified by their snapshot `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotCollector;

impl ComponentCollector for SnapshotCollector {
    type Scope = ComponentSnapshot;
    type Element = String;
    type Properties = Value;

    fn collect(&self, scope: &ComponentSnapshot) -> Vec<ComponentRecord<String, Value>> {
        scope.records()
    }
}
