use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_MARKER: &str = "mceNonEditable";
pub const DEFAULT_ROOT_ID: &str = "tinymce";

/// Explicit configuration for an [`Engine`](crate::Engine).
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Class carried by protected elements.
    pub marker: String,
    /// Element id of the editable surface. Upward walks stop there.
    pub root_id: String,
    /// Characters hosts insert as invisible cursor anchors.
    pub zero_width: Vec<char>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            root_id: DEFAULT_ROOT_ID.to_string(),
            zero_width: vec!['\u{FEFF}', '\u{200B}'],
        }
    }
}

impl GuardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GuardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.marker.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidMarker(self.marker.clone()));
        }
        if self.root_id.trim().is_empty() {
            return Err(ConfigError::EmptyRootId);
        }
        Ok(())
    }

    pub fn is_zero_width(&self, c: char) -> bool {
        self.zero_width.contains(&c)
    }
}
