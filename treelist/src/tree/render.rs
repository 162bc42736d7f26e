//! Render contract.
//!
//! The engine computes per-row interaction state and hands it, together with
//! the node, to a host-supplied renderer. What the renderer returns is up to
//! the host.

use std::ops::Range;

use super::events::PointerEvent;
use super::flatten::TreeView;
use super::item::TreeItem;
use super::state::TreeController;

/// Interaction state for one visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemContext<'a> {
    /// Id of the row's node.
    pub id: &'a str,
    /// Depth (0 = root level).
    pub level: u16,
    /// Children are shown.
    pub is_expanded: bool,
    /// Node is in the selection set.
    pub is_selected: bool,
    /// Node holds keyboard focus.
    pub is_focused: bool,
    /// Node can show children. False past the depth cap.
    pub has_children: bool,
    /// Selection toggles will reach the host.
    pub multi_select: bool,
}

impl ItemContext<'_> {
    /// Event for clicking the row itself.
    pub fn on_click(&self) -> PointerEvent {
        PointerEvent::Click(self.id.to_string())
    }

    /// Event for the expand/collapse affordance.
    pub fn on_toggle_expand(&self) -> PointerEvent {
        PointerEvent::Toggle(self.id.to_string())
    }

    /// Event for the selection affordance.
    pub fn on_toggle_select(&self) -> PointerEvent {
        PointerEvent::Select(self.id.to_string())
    }

    /// Event for an action affordance.
    pub fn on_action(&self, action: impl Into<String>) -> PointerEvent {
        PointerEvent::Action {
            id: self.id.to_string(),
            action: action.into(),
        }
    }
}

/// A host renderer for tree rows.
///
/// Implemented for any `Fn(&T, &ItemContext) -> Output` closure.
pub trait RenderItem<T> {
    /// Visual payload produced per row.
    type Output;

    /// Render one row.
    fn render_item(&self, node: &T, cx: &ItemContext<'_>) -> Self::Output;
}

impl<T, O, F> RenderItem<T> for F
where
    F: Fn(&T, &ItemContext<'_>) -> O,
{
    type Output = O;

    fn render_item(&self, node: &T, cx: &ItemContext<'_>) -> O {
        self(node, cx)
    }
}

/// Build the interaction state for the row at `index`.
pub fn item_context<'a, T: TreeItem>(
    view: &TreeView<'a, T>,
    controller: &TreeController,
    index: usize,
) -> Option<ItemContext<'a>> {
    let entry = view.get(index)?;
    let node: &'a T = entry.node;
    let id = node.id();
    Some(ItemContext {
        id,
        level: entry.depth,
        is_expanded: entry.is_expanded,
        is_selected: view.is_selected(id),
        is_focused: controller.is_focused(id),
        has_children: entry.has_children,
        multi_select: view.config().enable_multi_select,
    })
}

/// Render every visible row in order.
pub fn render_visible<T: TreeItem, R: RenderItem<T>>(
    view: &TreeView<'_, T>,
    controller: &TreeController,
    renderer: &R,
) -> Vec<R::Output> {
    render_range(view, controller, 0..view.len(), renderer)
}

/// Render a window of visible rows. The range is clamped to the view.
pub fn render_range<T: TreeItem, R: RenderItem<T>>(
    view: &TreeView<'_, T>,
    controller: &TreeController,
    range: Range<usize>,
    renderer: &R,
) -> Vec<R::Output> {
    let end = range.end.min(view.len());
    let start = range.start.min(end);
    (start..end)
        .filter_map(|index| {
            let cx = item_context(view, controller, index)?;
            let entry = view.get(index)?;
            Some(renderer.render_item(entry.node, &cx))
        })
        .collect()
}
