//! TreeItem trait and whole-tree walks.

use std::collections::HashSet;

use crate::error::TreeError;

/// Trait for items that can be displayed in a tree.
///
/// The engine reads nothing else from a node. Ids must be unique across the
/// entire tree and stable across re-renders so that expansion, selection and
/// focus survive a refetch of the collection.
///
/// # Example
///
/// ```ignore
/// struct Folder {
///     path: String,
///     children: Vec<Folder>,
/// }
///
/// impl TreeItem for Folder {
///     fn id(&self) -> &str {
///         &self.path
///     }
///
///     fn children(&self) -> &[Self] {
///         &self.children
///     }
/// }
/// ```
pub trait TreeItem: Sized {
    /// Unique, stable identifier for this node.
    fn id(&self) -> &str;

    /// Ordered child items. Empty for leaves.
    fn children(&self) -> &[Self];

    /// Whether this node declares any children.
    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

/// Find a node by id anywhere in the tree, ignoring expansion.
///
/// With duplicate ids the first match in pre-order wins.
pub fn find_node<'a, T: TreeItem>(nodes: &'a [T], id: &str) -> Option<&'a T> {
    let mut stack: Vec<&'a T> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.id() == id {
            return Some(node);
        }
        stack.extend(node.children().iter().rev());
    }
    None
}

/// Ids of the ancestors of `id`, root first.
///
/// These are the ids a host has to expand to reveal the node. Returns `None`
/// when the node does not exist.
pub fn ancestor_ids<T: TreeItem>(nodes: &[T], id: &str) -> Option<Vec<String>> {
    // Each frame holds the remaining siblings at one level; `path` mirrors the
    // open parents.
    let mut stack = vec![nodes.iter()];
    let mut path: Vec<&T> = Vec::new();

    loop {
        let Some(siblings) = stack.last_mut() else {
            return None;
        };
        let Some(node) = siblings.next() else {
            stack.pop();
            path.pop();
            continue;
        };
        if node.id() == id {
            return Some(path.iter().map(|p| p.id().to_string()).collect());
        }
        if node.has_children() {
            path.push(node);
            stack.push(node.children().iter());
        }
    }
}

/// Ids of every node that could be expanded within `max_depth`.
///
/// This is the set an "expand all" would insert.
pub fn expandable_ids<T: TreeItem>(nodes: &[T], max_depth: u16) -> HashSet<String> {
    let mut ids = HashSet::new();
    let mut stack: Vec<(&T, u16)> = nodes.iter().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        if depth < max_depth && node.has_children() {
            ids.insert(node.id().to_string());
            stack.extend(node.children().iter().map(|c| (c, depth + 1)));
        }
    }
    ids
}

/// Check that every id reachable from `nodes` is unique.
///
/// The engine never calls this. Hosts can run it after loading data to
/// catch a broken feed early.
pub fn validate_unique_ids<T: TreeItem>(nodes: &[T]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    let mut stack: Vec<&T> = nodes.iter().collect();
    while let Some(node) = stack.pop() {
        if !seen.insert(node.id()) {
            return Err(TreeError::DuplicateId(node.id().to_string()));
        }
        stack.extend(node.children());
    }
    Ok(())
}
