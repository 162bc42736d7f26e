//! Event handling for the tree controller.
//!
//! Every input resolves to at most one host callback. The decision itself is
//! the pure [`transition`] function; the controller methods apply its focus
//! result and forward its request.

use log::{debug, trace};

use crate::callbacks::{TreeCallbacks, TreeRequest};
use crate::keybinds::{KeyCombo, Keymap, TreeCommand};

use super::flatten::TreeView;
use super::item::TreeItem;
use super::state::TreeController;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Pointer input against a rendered row.
///
/// Render contracts hand these out (see
/// [`ItemContext`](super::render::ItemContext)) and the host feeds them back
/// when the matching part of a row is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Row clicked. Focuses the node.
    Click(String),
    /// Expand/collapse affordance clicked.
    Toggle(String),
    /// Selection affordance clicked.
    Select(String),
    /// An action affordance clicked.
    Action {
        /// Target node id.
        id: String,
        /// Opaque action token.
        action: String,
    },
}

impl PointerEvent {
    /// The node this event targets.
    pub fn id(&self) -> &str {
        match self {
            PointerEvent::Click(id) | PointerEvent::Toggle(id) | PointerEvent::Select(id) => id,
            PointerEvent::Action { id, .. } => id,
        }
    }
}

/// Outcome of a command: the next focus and at most one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Focus after the command.
    pub focus: Option<String>,
    /// Request for the host, if any.
    pub request: Option<TreeRequest>,
}

impl Transition {
    fn focus(focus: Option<String>) -> Self {
        Self {
            focus,
            request: None,
        }
    }

    fn request(focus: Option<String>, request: TreeRequest) -> Self {
        Self {
            focus,
            request: Some(request),
        }
    }
}

/// Compute the effect of a command without touching any state.
///
/// A `focused` id that is not in `view` counts as index -1: the next
/// `FocusNext` lands on the first entry. Select requests are produced even
/// when multi-select is disabled; [`dispatch`] drops them.
pub fn transition<T: TreeItem>(
    focused: Option<&str>,
    view: &TreeView<'_, T>,
    command: TreeCommand,
) -> Transition {
    let current = focused.and_then(|id| view.index_of(id));
    let unchanged = focused.map(str::to_string);
    let id_at = |index: usize| view.get(index).map(|e| e.node.id().to_string());
    let len = view.len();

    match command {
        TreeCommand::FocusNext if len > 0 => {
            let next = current.map_or(0, |index| (index + 1).min(len - 1));
            Transition::focus(id_at(next))
        }
        TreeCommand::FocusPrev if len > 0 => {
            let prev = current.map_or(0, |index| index.saturating_sub(1));
            Transition::focus(id_at(prev))
        }
        TreeCommand::FocusFirst if len > 0 => Transition::focus(id_at(0)),
        TreeCommand::FocusLast if len > 0 => Transition::focus(id_at(len - 1)),
        TreeCommand::Expand => match current.and_then(|index| view.get(index)) {
            Some(entry) if entry.has_children && !entry.is_expanded => Transition::request(
                unchanged,
                TreeRequest::ToggleExpand(entry.node.id().to_string()),
            ),
            _ => Transition::focus(unchanged),
        },
        TreeCommand::Collapse => match current.and_then(|index| view.get(index)) {
            Some(entry) if entry.is_expanded => Transition::request(
                unchanged,
                TreeRequest::ToggleExpand(entry.node.id().to_string()),
            ),
            _ => Transition::focus(unchanged),
        },
        TreeCommand::ToggleSelect => match current.and_then(|index| view.get(index)) {
            Some(entry) => Transition::request(
                unchanged,
                TreeRequest::ToggleSelect(entry.node.id().to_string()),
            ),
            None => Transition::focus(unchanged),
        },
        TreeCommand::ClearFocus => Transition::focus(None),
        TreeCommand::FocusNext
        | TreeCommand::FocusPrev
        | TreeCommand::FocusFirst
        | TreeCommand::FocusLast => Transition::focus(unchanged),
    }
}

/// Forward a request to the host.
///
/// Select toggles are suppressed when multi-select is disabled. Actions on
/// ids that exist nowhere in the tree are dropped. Returns whether a
/// callback fired.
pub fn dispatch<T: TreeItem, C: TreeCallbacks<T>>(
    view: &TreeView<'_, T>,
    request: &TreeRequest,
    callbacks: &mut C,
) -> bool {
    match request {
        TreeRequest::ToggleExpand(id) => {
            debug!("Request toggle expand: {}", id);
            callbacks.on_toggle_expand(id);
            true
        }
        TreeRequest::ToggleSelect(id) => {
            if !view.config().enable_multi_select {
                debug!("Multi-select disabled, suppressing toggle select: {}", id);
                return false;
            }
            debug!("Request toggle select: {}", id);
            callbacks.on_toggle_select(id);
            true
        }
        TreeRequest::Action { action, id } => match view.find(id) {
            Some(node) => {
                debug!("Request action '{}' on {}", action, id);
                callbacks.on_item_action(action, node);
                true
            }
            None => {
                debug!("Action '{}' targets unknown node {}, dropping", action, id);
                false
            }
        },
    }
}

impl TreeController {
    /// Handle a key press inside the tree's focus scope.
    ///
    /// Keys bound in `keymap` are consumed even when their command is a
    /// no-op, so the host does not also scroll or otherwise act on them.
    /// With keyboard navigation disabled every key is ignored.
    pub fn handle_key<T: TreeItem, C: TreeCallbacks<T>>(
        &mut self,
        view: &TreeView<'_, T>,
        keymap: &Keymap,
        key: &KeyCombo,
        callbacks: &mut C,
    ) -> EventResult {
        if !view.config().enable_keyboard_navigation {
            trace!("Keyboard navigation disabled, ignoring {:?}", key);
            return EventResult::Ignored;
        }
        let Some(command) = keymap.get(key) else {
            trace!("Unbound key {:?}", key);
            return EventResult::Ignored;
        };
        self.handle_command(view, command, callbacks);
        EventResult::Consumed
    }

    /// Apply a command. Returns the request that reached the host, if any.
    pub fn handle_command<T: TreeItem, C: TreeCallbacks<T>>(
        &mut self,
        view: &TreeView<'_, T>,
        command: TreeCommand,
        callbacks: &mut C,
    ) -> Option<TreeRequest> {
        self.reconcile(view);
        let Transition { focus, request } = transition(self.focused_id(), view, command);
        trace!("Command {:?} -> focus {:?}, request {:?}", command, focus, request);
        self.set_focused(focus);
        request.filter(|request| dispatch(view, request, callbacks))
    }

    /// Handle pointer input on a row.
    ///
    /// The target row gains focus. Events for ids that are not visible are
    /// ignored.
    pub fn handle_pointer<T: TreeItem, C: TreeCallbacks<T>>(
        &mut self,
        view: &TreeView<'_, T>,
        event: &PointerEvent,
        callbacks: &mut C,
    ) -> EventResult {
        self.reconcile(view);
        let Some(entry) = view.entry(event.id()) else {
            debug!("Pointer event on hidden node {}", event.id());
            return EventResult::Ignored;
        };
        let id = entry.node.id().to_string();

        let request = match event {
            PointerEvent::Click(_) => None,
            PointerEvent::Toggle(_) => entry
                .has_children
                .then(|| TreeRequest::ToggleExpand(id.clone())),
            PointerEvent::Select(_) => Some(TreeRequest::ToggleSelect(id.clone())),
            PointerEvent::Action { action, .. } => Some(TreeRequest::Action {
                action: action.clone(),
                id: id.clone(),
            }),
        };

        self.set_focused(Some(id));
        if let Some(request) = request {
            dispatch(view, &request, callbacks);
        }
        EventResult::Consumed
    }
}
