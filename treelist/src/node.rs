//! Node model for inspection and maintenance hierarchies.
//!
//! The engine only reads a node's id and children (through [`TreeItem`]).
//! Everything else is carried for the host's render contract.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TreeError;
use crate::tree::TreeItem;

/// The closed set of node variants.
///
/// Opaque to the engine. Hosts match on it exhaustively to pick a
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// A maintenance event.
    MaintenanceEvent,
    /// A sub-event nested under a maintenance event.
    SubEvent,
    /// A group of inspections.
    InspectionGroup,
    /// A single inspection.
    Inspection,
}

impl NodeKind {
    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::MaintenanceEvent => "maintenance-event",
            NodeKind::SubEvent => "sub-event",
            NodeKind::InspectionGroup => "inspection-group",
            NodeKind::Inspection => "inspection",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the hierarchy.
///
/// Ids must be unique among all nodes reachable from the root collection.
/// This is a precondition, not something the engine checks; see
/// [`validate_unique_ids`](crate::tree::validate_unique_ids) for an opt-in
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Stable unique identifier.
    pub id: String,
    /// Variant tag.
    pub kind: NodeKind,
    /// Display label.
    pub title: String,
    /// Opaque status tag, passed through untouched.
    #[serde(default)]
    pub status: String,
    /// Whether the host should offer an edit action.
    #[serde(default)]
    pub can_edit: bool,
    /// Whether the host should offer a delete action.
    #[serde(default)]
    pub can_delete: bool,
    /// Ordered children. Empty (or absent / `null` in JSON) means leaf.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<TreeNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TreeNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TreeNode {
    /// Create a leaf node with an empty status and no permissions.
    pub fn new(id: impl Into<String>, kind: NodeKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            status: String::new(),
            can_edit: false,
            can_delete: false,
            children: Vec::new(),
        }
    }

    /// Set the status tag.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Allow editing.
    pub fn editable(mut self) -> Self {
        self.can_edit = true;
        self
    }

    /// Allow deletion.
    pub fn deletable(mut self) -> Self {
        self.can_delete = true;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl TreeItem for TreeNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Parse a root node collection from a JSON array.
pub fn nodes_from_json_str(json: &str) -> Result<Vec<TreeNode>, TreeError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a root node collection from a JSON file.
pub fn load_nodes(path: impl AsRef<Path>) -> Result<Vec<TreeNode>, TreeError> {
    let contents = std::fs::read_to_string(path)?;
    nodes_from_json_str(&contents)
}
