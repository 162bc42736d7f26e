//! Action vocabulary of the terminal host.
//!
//! The engine treats these tokens as opaque. Only this host gives them
//! meaning.

use treelist::{NodeKind, TreeNode};

pub const CREATE_CHILD: &str = "create-child";
pub const EDIT: &str = "edit";
pub const COMPLETE: &str = "complete";
pub const DELETE: &str = "delete";

pub const COMPLETED_STATUS: &str = "completed";

/// Kind of node created under a parent of `kind`.
pub fn child_kind(kind: NodeKind) -> Option<NodeKind> {
    match kind {
        NodeKind::MaintenanceEvent => Some(NodeKind::SubEvent),
        NodeKind::SubEvent => Some(NodeKind::InspectionGroup),
        NodeKind::InspectionGroup => Some(NodeKind::Inspection),
        NodeKind::Inspection => None,
    }
}

/// Actions offered for a node, as `(token, label)` pairs in display order.
pub fn actions_for(node: &TreeNode) -> Vec<(&'static str, &'static str)> {
    let mut actions = Vec::new();
    if child_kind(node.kind).is_some() {
        actions.push((CREATE_CHILD, "n"));
    }
    if node.can_edit {
        actions.push((EDIT, "e"));
    }
    if node.status != COMPLETED_STATUS {
        actions.push((COMPLETE, "c"));
    }
    if node.can_delete {
        actions.push((DELETE, "d"));
    }
    actions
}

/// Action token bound to a shortcut character.
pub fn action_for_char(c: char) -> Option<&'static str> {
    match c {
        'n' => Some(CREATE_CHILD),
        'e' => Some(EDIT),
        'c' => Some(COMPLETE),
        'd' => Some(DELETE),
        _ => None,
    }
}
