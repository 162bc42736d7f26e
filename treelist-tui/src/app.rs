//! Host state: owns the tree data and the expansion/selection sets.

use std::collections::HashSet;
use std::io::{self, Write};

use log::{debug, info};
use treelist::callbacks::TreeRequest;
use treelist::keybinds::{Key, KeyCombo, Keymap};
use treelist::tree::{
    PointerEvent, TreeController, TreeItem, TreeView, find_node, render_visible,
};
use treelist::{TreeConfig, TreeNode};

use crate::actions::{
    COMPLETE, COMPLETED_STATUS, CREATE_CHILD, DELETE, EDIT, action_for_char, actions_for,
    child_kind,
};
use crate::render::{FOOTER_ROWS, HEADER_ROWS, Row, draw, render_row};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Host {
    nodes: Vec<TreeNode>,
    expanded: HashSet<String>,
    selected: HashSet<String>,
    config: TreeConfig,
    keymap: Keymap,
    controller: TreeController,
    scroll: usize,
    height: u16,
    status: String,
    next_id: usize,
}

impl Host {
    pub fn new(nodes: Vec<TreeNode>, config: TreeConfig) -> Self {
        Self {
            nodes,
            expanded: HashSet::new(),
            selected: HashSet::new(),
            config,
            keymap: Keymap::default(),
            controller: TreeController::new(),
            scroll: 0,
            height: 0,
            status: String::new(),
            next_id: 1,
        }
    }

    fn body_height(&self) -> usize {
        self.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize
    }

    /// Render all visible rows through the render contract.
    pub fn rows(&self) -> Vec<Row> {
        let view = TreeView::new(&self.nodes, &self.expanded, &self.selected, &self.config);
        render_visible(&view, &self.controller, &render_row)
    }

    pub fn draw(&mut self, out: &mut impl Write, width: u16, height: u16) -> io::Result<()> {
        self.height = height;
        let rows = self.rows();
        self.keep_focus_visible(&rows);
        let status = if self.status.is_empty() {
            format!("{} visible, {} selected", rows.len(), self.selected.len())
        } else {
            self.status.clone()
        };
        draw(out, &rows, self.scroll, width, height, &status)
    }

    fn keep_focus_visible(&mut self, rows: &[Row]) {
        let body = self.body_height().max(1);
        let max_scroll = rows.len().saturating_sub(body);
        if let Some(index) = rows.iter().position(|r| r.focused) {
            if index < self.scroll {
                self.scroll = index;
            } else if index >= self.scroll + body {
                self.scroll = index + 1 - body;
            }
        }
        self.scroll = self.scroll.min(max_scroll);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    pub fn handle_key(&mut self, key: KeyCombo) -> Flow {
        if key == KeyCombo::key(Key::Char('q')) || key == KeyCombo::key(Key::Char('c')).ctrl() {
            return Flow::Quit;
        }

        let mut requests: Vec<TreeRequest> = Vec::new();
        {
            let view = TreeView::new(&self.nodes, &self.expanded, &self.selected, &self.config);
            let result = self
                .controller
                .handle_key(&view, &self.keymap, &key, &mut requests);

            if !result.is_handled()
                && let Key::Char(c) = key.key
                && let Some(action) = action_for_char(c)
                && let Some(entry) = self.controller.focused_entry(&view)
            {
                if actions_for(entry.node).iter().any(|(token, _)| *token == action) {
                    let event = PointerEvent::Action {
                        id: entry.node.id.clone(),
                        action: action.to_string(),
                    };
                    self.controller.handle_pointer(&view, &event, &mut requests);
                } else {
                    self.status = format!("'{}' is not allowed on {}", action, entry.node.title);
                }
            }
        }
        self.apply(requests);
        Flow::Continue
    }

    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(offset) = row.checked_sub(HEADER_ROWS) else {
            return;
        };
        if offset as usize >= self.body_height() {
            return;
        }
        let index = self.scroll + offset as usize;
        let Some(event) = self.rows().get(index).map(|r| r.hit(column)) else {
            return;
        };

        let mut requests: Vec<TreeRequest> = Vec::new();
        {
            let view = TreeView::new(&self.nodes, &self.expanded, &self.selected, &self.config);
            self.controller.handle_pointer(&view, &event, &mut requests);
        }
        self.apply(requests);
    }

    fn apply(&mut self, requests: Vec<TreeRequest>) {
        for request in requests {
            if request.apply_to_sets(&mut self.expanded, &mut self.selected) {
                debug!("Applied {:?}", request);
                self.status.clear();
                continue;
            }
            if let TreeRequest::Action { action, id } = request {
                self.perform(&action, &id);
            }
        }
    }

    /// Next `new-N` id not already in the tree.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = format!("new-{}", self.next_id);
            self.next_id += 1;
            if find_node(&self.nodes, &id).is_none() {
                return id;
            }
        }
    }

    fn perform(&mut self, action: &str, id: &str) {
        info!("Action '{}' on {}", action, id);
        match action {
            COMPLETE => {
                if let Some(node) = find_node_mut(&mut self.nodes, id) {
                    node.status = COMPLETED_STATUS.to_string();
                    self.status = format!("Completed {}", node.title);
                }
            }
            DELETE => {
                if let Some(node) = remove_node(&mut self.nodes, id) {
                    for removed in subtree_ids(&node) {
                        self.expanded.remove(removed);
                        self.selected.remove(removed);
                    }
                    self.status = format!("Deleted {}", node.title);
                }
            }
            CREATE_CHILD => {
                let child_id = self.fresh_id();
                if let Some(parent) = find_node_mut(&mut self.nodes, id)
                    && let Some(kind) = child_kind(parent.kind)
                {
                    let child = TreeNode::new(child_id, kind, format!("New {kind}"))
                        .status("open")
                        .editable()
                        .deletable();
                    parent.children.push(child);
                    self.status = format!("Added {} under {}", kind, parent.title);
                    self.expanded.insert(id.to_string());
                }
            }
            EDIT => {
                if let Some(node) = find_node_mut(&mut self.nodes, id) {
                    self.status = format!("Edit form for '{}' is not available here", node.title);
                }
            }
            other => {
                self.status = format!("Unknown action '{other}'");
            }
        }
    }
}

/// Ids of `node` and all of its descendants.
fn subtree_ids(node: &TreeNode) -> Vec<&str> {
    let mut ids = Vec::new();
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        ids.push(node.id());
        stack.extend(node.children());
    }
    ids
}

fn find_node_mut<'a>(nodes: &'a mut [TreeNode], id: &str) -> Option<&'a mut TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn remove_node(nodes: &mut Vec<TreeNode>, id: &str) -> Option<TreeNode> {
    if let Some(index) = nodes.iter().position(|n| n.id == id) {
        return Some(nodes.remove(index));
    }
    nodes
        .iter_mut()
        .find_map(|node| remove_node(&mut node.children, id))
}
