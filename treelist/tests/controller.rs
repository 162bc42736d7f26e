use std::collections::HashSet;

use treelist::callbacks::{TreeCallbacks, TreeRequest};
use treelist::keybinds::{Key, KeyCombo, Keymap, TreeCommand};
use treelist::tree::{EventResult, PointerEvent, TreeController, TreeView, transition};
use treelist::{NodeKind, TreeConfig, TreeNode};

#[derive(Debug, Default)]
struct Recorder {
    expands: Vec<String>,
    selects: Vec<String>,
    actions: Vec<(String, String)>,
}

impl Recorder {
    fn calls(&self) -> usize {
        self.expands.len() + self.selects.len() + self.actions.len()
    }
}

impl TreeCallbacks<TreeNode> for Recorder {
    fn on_toggle_expand(&mut self, id: &str) {
        self.expands.push(id.to_string());
    }

    fn on_toggle_select(&mut self, id: &str) {
        self.selects.push(id.to_string());
    }

    fn on_item_action(&mut self, action: &str, node: &TreeNode) {
        self.actions.push((action.to_string(), node.id.clone()));
    }
}

fn set(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// A { B }, C
fn tree() -> Vec<TreeNode> {
    vec![
        TreeNode::new("A", NodeKind::MaintenanceEvent, "A")
            .child(TreeNode::new("B", NodeKind::SubEvent, "B").deletable()),
        TreeNode::new("C", NodeKind::MaintenanceEvent, "C"),
    ]
}

fn press(
    controller: &mut TreeController,
    view: &TreeView<'_, TreeNode>,
    key: Key,
    recorder: &mut Recorder,
) -> EventResult {
    controller.handle_key(view, &Keymap::default(), &KeyCombo::key(key), recorder)
}

// ============================================================================
// Focus movement
// ============================================================================

#[test]
fn test_first_arrow_down_focuses_first_entry() {
    let nodes = tree();
    let (expanded, selected) = (set(&["A"]), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    assert_eq!(
        press(&mut controller, &view, Key::Down, &mut recorder),
        EventResult::Consumed
    );
    assert_eq!(controller.focused_id(), Some("A"));
    press(&mut controller, &view, Key::Down, &mut recorder);
    assert_eq!(controller.focused_id(), Some("B"));
    press(&mut controller, &view, Key::Down, &mut recorder);
    assert_eq!(controller.focused_id(), Some("C"));
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_arrow_down_at_last_entry_is_noop() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    assert!(controller.focus(&view, "C"));
    let result = press(&mut controller, &view, Key::Down, &mut recorder);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(controller.focused_id(), Some("C"));
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_arrow_up_clamps_at_first() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "C");
    press(&mut controller, &view, Key::Up, &mut recorder);
    assert_eq!(controller.focused_id(), Some("A"));
    press(&mut controller, &view, Key::Up, &mut recorder);
    assert_eq!(controller.focused_id(), Some("A"));
}

#[test]
fn test_home_and_end() {
    let nodes = tree();
    let (expanded, selected) = (set(&["A"]), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    press(&mut controller, &view, Key::End, &mut recorder);
    assert_eq!(controller.focused_id(), Some("C"));
    press(&mut controller, &view, Key::Home, &mut recorder);
    assert_eq!(controller.focused_id(), Some("A"));
}

#[test]
fn test_navigation_on_empty_tree() {
    let nodes: Vec<TreeNode> = vec![];
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    for key in [Key::Down, Key::Up, Key::Home, Key::End, Key::Right, Key::Enter] {
        assert_eq!(
            press(&mut controller, &view, key, &mut recorder),
            EventResult::Consumed
        );
    }
    assert_eq!(controller.focused_id(), None);
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_escape_clears_focus() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "A");
    press(&mut controller, &view, Key::Escape, &mut recorder);
    assert_eq!(controller.focused_id(), None);
}

// ============================================================================
// Expand / collapse
// ============================================================================

#[test]
fn test_arrow_right_requests_expand() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "A");
    press(&mut controller, &view, Key::Right, &mut recorder);
    assert_eq!(recorder.expands, vec!["A".to_string()]);
    assert_eq!(controller.focused_id(), Some("A"));
}

#[test]
fn test_arrow_right_on_expanded_or_leaf_is_noop() {
    let nodes = tree();
    let (expanded, selected) = (set(&["A"]), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "A");
    press(&mut controller, &view, Key::Right, &mut recorder);
    controller.focus(&view, "B");
    press(&mut controller, &view, Key::Right, &mut recorder);
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_arrow_right_past_depth_cap_is_noop() {
    let nodes = vec![
        TreeNode::new("A", NodeKind::MaintenanceEvent, "A").child(
            TreeNode::new("B", NodeKind::SubEvent, "B")
                .child(TreeNode::new("C", NodeKind::Inspection, "C")),
        ),
    ];
    let (expanded, selected) = (set(&["A"]), HashSet::new());
    let config = TreeConfig::new().with_max_depth(1);
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "B");
    press(&mut controller, &view, Key::Right, &mut recorder);
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_arrow_left_collapses_only_expanded() {
    let nodes = tree();
    let (expanded, selected) = (set(&["A"]), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "B");
    press(&mut controller, &view, Key::Left, &mut recorder);
    assert_eq!(recorder.calls(), 0);
    assert_eq!(controller.focused_id(), Some("B"));

    controller.focus(&view, "A");
    press(&mut controller, &view, Key::Left, &mut recorder);
    assert_eq!(recorder.expands, vec!["A".to_string()]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_enter_and_space_toggle_select() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "C");
    press(&mut controller, &view, Key::Enter, &mut recorder);
    press(&mut controller, &view, Key::Space, &mut recorder);
    assert_eq!(recorder.selects, vec!["C".to_string(), "C".to_string()]);
}

#[test]
fn test_enter_without_focus_is_noop() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    press(&mut controller, &view, Key::Enter, &mut recorder);
    assert_eq!(recorder.calls(), 0);
    assert_eq!(controller.focused_id(), None);
}

#[test]
fn test_multi_select_disabled_suppresses_select() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::new().multi_select(false);
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.focus(&view, "A");
    let result = press(&mut controller, &view, Key::Enter, &mut recorder);
    assert_eq!(result, EventResult::Consumed);
    assert!(recorder.selects.is_empty());
    assert_eq!(controller.focused_id(), Some("A"));

    // The transition itself still computes the request.
    let t = transition(Some("A"), &view, TreeCommand::ToggleSelect);
    assert_eq!(t.request, Some(TreeRequest::ToggleSelect("A".to_string())));
}

// ============================================================================
// Stale focus
// ============================================================================

#[test]
fn test_collapse_orphans_focus() {
    let nodes = tree();
    let selected = HashSet::new();
    let config = TreeConfig::default();
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    let mut expanded = set(&["A"]);
    {
        let view = TreeView::new(&nodes, &expanded, &selected, &config);
        assert!(controller.focus(&view, "B"));
    }

    // Host collapses A out-of-band.
    expanded.remove("A");
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    assert_eq!(controller.current_index(&view), None);

    press(&mut controller, &view, Key::Down, &mut recorder);
    assert_eq!(controller.focused_id(), Some("A"));
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_reconcile_clears_stale_focus() {
    let nodes = tree();
    let selected = HashSet::new();
    let config = TreeConfig::default();
    let mut controller = TreeController::new();

    let expanded = set(&["A"]);
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    controller.focus(&view, "B");
    assert!(!controller.reconcile(&view));

    let collapsed = HashSet::new();
    let view = TreeView::new(&nodes, &collapsed, &selected, &config);
    assert!(controller.reconcile(&view));
    assert_eq!(controller.focused_id(), None);
}

#[test]
fn test_focus_hidden_node_refused() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();

    assert!(!controller.focus(&view, "B"));
    assert_eq!(controller.focused_id(), None);
}

// ============================================================================
// Keyboard config and keymap
// ============================================================================

#[test]
fn test_keyboard_disabled_ignores_keys() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::new().keyboard_navigation(false);
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    let result = press(&mut controller, &view, Key::Down, &mut recorder);
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(controller.focused_id(), None);
}

#[test]
fn test_unbound_key_ignored() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    let result = press(&mut controller, &view, Key::Char('x'), &mut recorder);
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_custom_keymap() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    let mut keymap = Keymap::default();
    keymap.bind(KeyCombo::key(Key::Char('j')), TreeCommand::FocusNext);
    keymap.unbind(&KeyCombo::key(Key::Down));

    let j = KeyCombo::key(Key::Char('j'));
    controller.handle_key(&view, &keymap, &j, &mut recorder);
    assert_eq!(controller.focused_id(), Some("A"));

    let down = KeyCombo::key(Key::Down);
    let result = controller.handle_key(&view, &keymap, &down, &mut recorder);
    assert_eq!(result, EventResult::Ignored);
}

// ============================================================================
// Single-callback invariant
// ============================================================================

#[test]
fn test_at_most_one_callback_per_event() {
    let nodes = tree();
    let selected = HashSet::new();
    let config = TreeConfig::default();
    let keys = [
        Key::Down,
        Key::Right,
        Key::Left,
        Key::Enter,
        Key::Space,
        Key::Up,
        Key::End,
        Key::Home,
        Key::Escape,
    ];

    for expanded in [HashSet::new(), set(&["A"])] {
        let view = TreeView::new(&nodes, &expanded, &selected, &config);
        for start in [None, Some("A"), Some("B"), Some("C")] {
            for key in keys {
                let mut controller = TreeController::new();
                if let Some(id) = start {
                    controller.focus(&view, id);
                }
                let mut recorder = Recorder::default();
                press(&mut controller, &view, key, &mut recorder);
                assert!(recorder.calls() <= 1, "{:?} from {:?}", key, start);
            }
        }
    }
}

// ============================================================================
// Pointer input
// ============================================================================

#[test]
fn test_click_focuses_without_callback() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    let result =
        controller.handle_pointer(&view, &PointerEvent::Click("C".to_string()), &mut recorder);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(controller.focused_id(), Some("C"));
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn test_pointer_toggle_and_select() {
    let nodes = tree();
    let (expanded, selected) = (set(&["A"]), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    controller.handle_pointer(&view, &PointerEvent::Toggle("A".to_string()), &mut recorder);
    controller.handle_pointer(&view, &PointerEvent::Toggle("B".to_string()), &mut recorder);
    controller.handle_pointer(&view, &PointerEvent::Select("B".to_string()), &mut recorder);

    assert_eq!(recorder.expands, vec!["A".to_string()]);
    assert_eq!(recorder.selects, vec!["B".to_string()]);
    assert_eq!(controller.focused_id(), Some("B"));
}

#[test]
fn test_pointer_action_round_trips_token() {
    let nodes = tree();
    let (expanded, selected) = (set(&["A"]), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    let event = PointerEvent::Action {
        id: "B".to_string(),
        action: "approve:level-2".to_string(),
    };
    controller.handle_pointer(&view, &event, &mut recorder);
    assert_eq!(
        recorder.actions,
        vec![("approve:level-2".to_string(), "B".to_string())]
    );
}

#[test]
fn test_pointer_on_hidden_node_ignored() {
    let nodes = tree();
    let (expanded, selected) = (HashSet::new(), HashSet::new());
    let config = TreeConfig::default();
    let view = TreeView::new(&nodes, &expanded, &selected, &config);
    let mut controller = TreeController::new();
    let mut recorder = Recorder::default();

    let result =
        controller.handle_pointer(&view, &PointerEvent::Select("B".to_string()), &mut recorder);
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(recorder.calls(), 0);
    assert_eq!(controller.focused_id(), None);
}

// ============================================================================
// Request queue
// ============================================================================

#[test]
fn test_request_queue_applies_to_sets() {
    let nodes = tree();
    let mut expanded = HashSet::new();
    let mut selected = HashSet::new();
    let config = TreeConfig::default();
    let mut controller = TreeController::new();
    let keymap = Keymap::default();

    let mut requests: Vec<TreeRequest> = Vec::new();
    {
        let view = TreeView::new(&nodes, &expanded, &selected, &config);
        controller.handle_key(&view, &keymap, &KeyCombo::key(Key::Down), &mut requests);
        controller.handle_key(&view, &keymap, &KeyCombo::key(Key::Right), &mut requests);
    }
    for request in requests.drain(..) {
        assert!(request.apply_to_sets(&mut expanded, &mut selected));
    }
    assert!(expanded.contains("A"));

    {
        let view = TreeView::new(&nodes, &expanded, &selected, &config);
        assert_eq!(view.visible_ids(), vec!["A", "B", "C"]);
        controller.handle_key(&view, &keymap, &KeyCombo::key(Key::Down), &mut requests);
        controller.handle_key(&view, &keymap, &KeyCombo::key(Key::Space), &mut requests);
    }
    assert_eq!(requests, vec![TreeRequest::ToggleSelect("B".to_string())]);
    requests[0].apply_to_sets(&mut expanded, &mut selected);
    assert!(selected.contains("B"));
}
