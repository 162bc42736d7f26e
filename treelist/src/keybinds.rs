use std::collections::HashMap;

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Delete
    Delete,
}

/// Navigation commands understood by the tree controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeCommand {
    /// Move focus to the next visible entry.
    FocusNext,
    /// Move focus to the previous visible entry.
    FocusPrev,
    /// Move focus to the first visible entry.
    FocusFirst,
    /// Move focus to the last visible entry.
    FocusLast,
    /// Request expansion of the focused node.
    Expand,
    /// Request collapse of the focused node.
    Collapse,
    /// Request a selection toggle of the focused node.
    ToggleSelect,
    /// Drop focus.
    ClearFocus,
}

/// Mapping from key combos to tree commands.
///
/// Keys that map to a command are consumed by the tree even when the command
/// turns out to be a no-op. Unmapped keys are left for the host.
#[derive(Debug, Clone)]
pub struct Keymap {
    binds: HashMap<KeyCombo, TreeCommand>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyCombo::key(Key::Down), TreeCommand::FocusNext);
        keymap.bind(KeyCombo::key(Key::Up), TreeCommand::FocusPrev);
        keymap.bind(KeyCombo::key(Key::Home), TreeCommand::FocusFirst);
        keymap.bind(KeyCombo::key(Key::End), TreeCommand::FocusLast);
        keymap.bind(KeyCombo::key(Key::Right), TreeCommand::Expand);
        keymap.bind(KeyCombo::key(Key::Left), TreeCommand::Collapse);
        keymap.bind(KeyCombo::key(Key::Enter), TreeCommand::ToggleSelect);
        keymap.bind(KeyCombo::key(Key::Space), TreeCommand::ToggleSelect);
        keymap.bind(KeyCombo::key(Key::Escape), TreeCommand::ClearFocus);
        keymap
    }
}

impl Keymap {
    /// Create a keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            binds: HashMap::new(),
        }
    }

    /// Bind a key combo to a command, replacing any previous binding.
    pub fn bind(&mut self, key: KeyCombo, command: TreeCommand) {
        self.binds.insert(key, command);
    }

    /// Remove a binding.
    pub fn unbind(&mut self, key: &KeyCombo) -> Option<TreeCommand> {
        self.binds.remove(key)
    }

    /// Look up the command for a key combo.
    pub fn get(&self, key: &KeyCombo) -> Option<TreeCommand> {
        self.binds.get(key).copied()
    }

    /// Merge another keymap into this one. Bindings in `other` win.
    pub fn merge(&mut self, other: Keymap) {
        self.binds.extend(other.binds);
    }
}
