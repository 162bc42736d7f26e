//! Tree configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Default nesting limit for expansion.
pub const DEFAULT_MAX_DEPTH: i32 = 5;

/// Per-tree configuration.
///
/// Field names follow the host contract (`maxDepth`, `enableMultiSelect`,
/// `enableKeyboardNavigation`) when loaded from JSON. Missing keys take their
/// default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeConfig {
    /// Requested nesting limit. Read through [`TreeConfig::max_depth`], which
    /// clamps it.
    #[serde(rename = "maxDepth")]
    pub raw_max_depth: i32,

    /// Whether selection toggles reach the host.
    pub enable_multi_select: bool,

    /// Whether key events are handled at all.
    pub enable_keyboard_navigation: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            raw_max_depth: DEFAULT_MAX_DEPTH,
            enable_multi_select: true,
            enable_keyboard_navigation: true,
        }
    }
}

impl TreeConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective nesting limit.
    ///
    /// Values `<= 0` clamp to 0, which means no node can be expanded.
    pub fn max_depth(&self) -> u16 {
        self.raw_max_depth.clamp(0, i32::from(u16::MAX)) as u16
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, depth: i32) -> Self {
        self.raw_max_depth = depth;
        self
    }

    /// Enable or disable selection toggles.
    pub fn multi_select(mut self, enabled: bool) -> Self {
        self.enable_multi_select = enabled;
        self
    }

    /// Enable or disable keyboard handling.
    pub fn keyboard_navigation(mut self, enabled: bool) -> Self {
        self.enable_keyboard_navigation = enabled;
        self
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
