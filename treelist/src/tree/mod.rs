//! Hierarchical tree engine.
//!
//! The host owns the node collection and two id sets (expanded, selected).
//! Each render it builds a [`TreeView`], which flattens the visible part of
//! the tree, renders rows through its own [`RenderItem`], and feeds input to a
//! [`TreeController`]. The controller keeps only the focused id and answers
//! input with at most one callback per event.
//!
//! # Example
//!
//! ```ignore
//! use treelist::prelude::*;
//!
//! let view = TreeView::new(&nodes, &expanded, &selected, &config);
//! let rows = render_visible(&view, &controller, &|node: &TreeNode, cx: &ItemContext<'_>| {
//!     format!("{}{}", "  ".repeat(cx.level as usize), node.title)
//! });
//!
//! let mut requests: Vec<TreeRequest> = Vec::new();
//! controller.handle_key(&view, &keymap, &KeyCombo::key(Key::Right), &mut requests);
//! drop(view);
//! for request in &requests {
//!     request.apply_to_sets(&mut expanded, &mut selected);
//! }
//! ```

mod events;
mod flatten;
mod item;
mod render;
mod state;

pub use events::{EventResult, PointerEvent, Transition, dispatch, transition};
pub use flatten::{FlatEntry, TreeView, flatten};
pub use item::{TreeItem, ancestor_ids, expandable_ids, find_node, validate_unique_ids};
pub use render::{ItemContext, RenderItem, item_context, render_range, render_visible};
pub use state::TreeController;
