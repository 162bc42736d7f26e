//! Host callbacks and their value form.
//!
//! The engine never writes the expansion or selection sets. It asks the host
//! to change them through [`TreeCallbacks`], and the host applies the change to
//! the data it owns before the next render.

use std::collections::HashSet;

use log::debug;

use crate::tree::TreeItem;

/// Mutation callbacks implemented by the host.
///
/// Calls are fire-and-forget. The engine does not inspect results or catch
/// panics; a panicking callback unwinds into the host's own event handling.
pub trait TreeCallbacks<T> {
    /// The host should flip `id` in its expansion set.
    fn on_toggle_expand(&mut self, id: &str);

    /// The host should flip `id` in its selection set.
    fn on_toggle_select(&mut self, id: &str);

    /// A non-navigational command for `node`. The action token is opaque and
    /// handed back exactly as the render contract produced it.
    fn on_item_action(&mut self, action: &str, node: &T);
}

/// A single callback invocation as a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeRequest {
    /// Flip expansion of a node.
    ToggleExpand(String),
    /// Flip selection of a node.
    ToggleSelect(String),
    /// Run a host-defined action on a node.
    Action {
        /// Opaque action token.
        action: String,
        /// Target node id.
        id: String,
    },
}

impl TreeRequest {
    /// The node this request targets.
    pub fn id(&self) -> &str {
        match self {
            TreeRequest::ToggleExpand(id) | TreeRequest::ToggleSelect(id) => id,
            TreeRequest::Action { id, .. } => id,
        }
    }

    /// Apply an expand or select toggle to host-owned sets.
    ///
    /// Returns `false` for actions, which only the host can interpret.
    pub fn apply_to_sets(
        &self,
        expanded: &mut HashSet<String>,
        selected: &mut HashSet<String>,
    ) -> bool {
        match self {
            TreeRequest::ToggleExpand(id) => {
                toggle(expanded, id);
                true
            }
            TreeRequest::ToggleSelect(id) => {
                toggle(selected, id);
                true
            }
            TreeRequest::Action { .. } => false,
        }
    }
}

fn toggle(set: &mut HashSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}

/// Queue requests instead of acting on them.
///
/// Useful when the host's sets are still borrowed by the current view: drain
/// the queue once the view is dropped.
impl<T: TreeItem> TreeCallbacks<T> for Vec<TreeRequest> {
    fn on_toggle_expand(&mut self, id: &str) {
        self.push(TreeRequest::ToggleExpand(id.to_string()));
    }

    fn on_toggle_select(&mut self, id: &str) {
        self.push(TreeRequest::ToggleSelect(id.to_string()));
    }

    fn on_item_action(&mut self, action: &str, node: &T) {
        debug!("Queued action '{}' for {}", action, node.id());
        self.push(TreeRequest::Action {
            action: action.to_string(),
            id: node.id().to_string(),
        });
    }
}
