pub mod callbacks;
pub mod config;
pub mod error;
pub mod input;
pub mod keybinds;
pub mod node;
pub mod tree;

pub use config::TreeConfig;
pub use error::TreeError;
pub use node::{NodeKind, TreeNode};

pub mod prelude {
    pub use crate::callbacks::{TreeCallbacks, TreeRequest};
    pub use crate::config::TreeConfig;
    pub use crate::error::TreeError;
    pub use crate::keybinds::{Key, KeyCombo, Keymap, Modifiers, TreeCommand};
    pub use crate::node::{NodeKind, TreeNode};
    pub use crate::tree::{
        EventResult, FlatEntry, ItemContext, PointerEvent, RenderItem, TreeController, TreeItem,
        TreeView, render_visible,
    };
}
