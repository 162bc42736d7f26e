//! Tree controller state.

use log::debug;

use super::flatten::{FlatEntry, TreeView};
use super::item::TreeItem;

/// Interaction state for one mounted tree.
///
/// The only thing the controller owns is the focused node id. Expansion and
/// selection belong to the host and arrive fresh with every [`TreeView`].
///
/// A focus id that is not in the current view (an ancestor was collapsed, the
/// node was deleted) is treated as no focus. It is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeController {
    focused: Option<String>,
}

impl TreeController {
    /// Create a controller with no focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw focused id, which may be stale.
    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Focus a node if it is visible in `view`.
    ///
    /// Returns whether focus changed.
    pub fn focus<T: TreeItem>(&mut self, view: &TreeView<'_, T>, id: &str) -> bool {
        if !view.contains(id) || self.focused.as_deref() == Some(id) {
            return false;
        }
        debug!("Focus -> {}", id);
        self.focused = Some(id.to_string());
        true
    }

    /// Drop focus.
    pub fn clear_focus(&mut self) {
        if self.focused.take().is_some() {
            debug!("Focus cleared");
        }
    }

    /// Position of the focused node in `view`, or `None` when there is no
    /// focus or the focus is stale.
    pub fn current_index<T: TreeItem>(&self, view: &TreeView<'_, T>) -> Option<usize> {
        self.focused.as_deref().and_then(|id| view.index_of(id))
    }

    /// The focused entry, if it is visible.
    pub fn focused_entry<'v, 'a, T: TreeItem>(
        &self,
        view: &'v TreeView<'a, T>,
    ) -> Option<&'v FlatEntry<'a, T>> {
        self.current_index(view).and_then(|index| view.get(index))
    }

    /// Whether `id` is the focused node.
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Clear focus if it points at a node that is not visible in `view`.
    ///
    /// Returns whether focus was cleared.
    pub fn reconcile<T: TreeItem>(&mut self, view: &TreeView<'_, T>) -> bool {
        match self.focused.as_deref() {
            Some(id) if !view.contains(id) => {
                debug!("Focus {} no longer visible, clearing", id);
                self.focused = None;
                true
            }
            _ => false,
        }
    }

    pub(super) fn set_focused(&mut self, focused: Option<String>) {
        if self.focused != focused {
            debug!("Focus {:?} -> {:?}", self.focused, focused);
            self.focused = focused;
        }
    }
}
