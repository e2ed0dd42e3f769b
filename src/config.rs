//! Application configuration.
//!
//! The configuration is loaded from a JSON file (by default
//! `$XDG_CONFIG_HOME/wspick/config.json`).  The top-level schema uses a
//! `"picker"` key so the file can be extended with additional sections later
//! without breaking backward compatibility.
//!
//! # Example
//!
//! ```json
//! {
//!   "picker": {
//!     "save_on_change": false,
//!     "save_on_switch": true,
//!     "show_delete_prompt": true,
//!     "show_instructions": true
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional: a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Picker behaviour settings.
    #[serde(default)]
    pub picker: PickerConfig,
}

/// Picker behaviour settings.
///
/// These are read each time a command needs them, so changing them while a
/// picker is open takes effect on the next command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Plain Enter saves the active workspace before switching.
    pub save_on_change: bool,
    /// Every switch saves the active workspace first.
    pub save_on_switch: bool,
    /// Ask for confirmation before deleting a workspace.
    pub show_delete_prompt: bool,
    /// Show the command hint bar under the list.
    pub show_instructions: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            save_on_change: false,
            save_on_switch: false,
            show_delete_prompt: true,
            show_instructions: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
