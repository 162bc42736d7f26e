//! Tree flattening and the per-render view snapshot.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::trace;

use crate::config::TreeConfig;

use super::item::{TreeItem, find_node};

/// A visible node in the flattened tree.
///
/// Entries borrow from the node collection, so they cannot outlive the
/// render in which they were computed.
pub struct FlatEntry<'a, T> {
    /// The node itself.
    pub node: &'a T,
    /// Depth in tree (0 = root level).
    pub depth: u16,
    /// Whether this node can show children: it declares some and sits above
    /// the depth cap.
    pub has_children: bool,
    /// Whether this node's children are currently shown.
    pub is_expanded: bool,
}

impl<T> Clone for FlatEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FlatEntry<'_, T> {}

impl<T: TreeItem> fmt::Debug for FlatEntry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatEntry")
            .field("id", &self.node.id())
            .field("depth", &self.depth)
            .field("has_children", &self.has_children)
            .field("is_expanded", &self.is_expanded)
            .finish()
    }
}

impl<T: TreeItem> PartialEq for FlatEntry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id() == other.node.id()
            && self.depth == other.depth
            && self.has_children == other.has_children
            && self.is_expanded == other.is_expanded
    }
}

/// Flatten the visible part of a tree into pre-order.
///
/// A node's children follow it directly, before its next sibling, only when
/// its id is in `expanded` and its depth is below `max_depth`. Sibling order
/// is kept as given. Nodes at or past the cap are reported as leaves.
///
/// Uses an explicit stack of sibling iterators, so deep input cannot exhaust
/// the call stack.
pub fn flatten<'a, T: TreeItem>(
    nodes: &'a [T],
    expanded: &HashSet<String>,
    max_depth: u16,
) -> Vec<FlatEntry<'a, T>> {
    let mut out = Vec::new();
    let mut stack: Vec<(std::slice::Iter<'a, T>, u16)> = vec![(nodes.iter(), 0)];

    loop {
        let Some((siblings, depth)) = stack.last_mut() else {
            break;
        };
        let depth = *depth;
        let Some(node) = siblings.next() else {
            stack.pop();
            continue;
        };

        let has_children = depth < max_depth && node.has_children();
        let is_expanded = has_children && expanded.contains(node.id());
        out.push(FlatEntry {
            node,
            depth,
            has_children,
            is_expanded,
        });

        if is_expanded {
            stack.push((node.children().iter(), depth + 1));
        }
    }

    trace!("Flattened tree: {} visible entries", out.len());
    out
}

/// Snapshot of a tree for one render pass.
///
/// Built from caller-owned data: the root collection, the expansion and
/// selection sets, and the config. Holds the flattened entries plus an
/// id-to-position map so focus lookups do not re-walk the tree.
///
/// Rebuild the view whenever any input changes. The borrow on the sets keeps
/// a host from mutating them while a view is alive; queue requests and apply
/// them after the view is dropped.
pub struct TreeView<'a, T: TreeItem> {
    nodes: &'a [T],
    expanded: &'a HashSet<String>,
    selected: &'a HashSet<String>,
    config: TreeConfig,
    entries: Vec<FlatEntry<'a, T>>,
    positions: HashMap<&'a str, usize>,
}

impl<'a, T: TreeItem> TreeView<'a, T> {
    /// Flatten `nodes` against the given sets.
    pub fn new(
        nodes: &'a [T],
        expanded: &'a HashSet<String>,
        selected: &'a HashSet<String>,
        config: &TreeConfig,
    ) -> Self {
        let entries = flatten(nodes, expanded, config.max_depth());
        let mut positions = HashMap::with_capacity(entries.len());
        for (index, node) in entries.iter().map(|e| e.node).enumerate() {
            // First occurrence wins for duplicate ids.
            positions.entry(node.id()).or_insert(index);
        }
        Self {
            nodes,
            expanded,
            selected,
            config: *config,
            entries,
            positions,
        }
    }

    /// The root collection.
    pub fn nodes(&self) -> &'a [T] {
        self.nodes
    }

    /// The config this view was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// All visible entries in order.
    pub fn entries(&self) -> &[FlatEntry<'a, T>] {
        &self.entries
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a visible entry by index.
    pub fn get(&self, index: usize) -> Option<&FlatEntry<'a, T>> {
        self.entries.get(index)
    }

    /// Position of a visible node.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Visible entry for a node id.
    pub fn entry(&self, id: &str) -> Option<&FlatEntry<'a, T>> {
        self.index_of(id).and_then(|index| self.entries.get(index))
    }

    /// Whether a node is visible.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Whether an id is in the expansion set.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Whether an id is in the selection set.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Visible ids in order.
    pub fn visible_ids(&self) -> Vec<&'a str> {
        self.entries.iter().map(|e| e.node).map(T::id).collect()
    }

    /// Find a node by id, visible or not.
    pub fn find(&self, id: &str) -> Option<&'a T> {
        match self.entry(id) {
            Some(entry) => Some(entry.node),
            None => find_node(self.nodes, id),
        }
    }
}

impl<T: TreeItem> fmt::Debug for TreeView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView")
            .field("entries", &self.entries)
            .field("config", &self.config)
            .finish()
    }
}
