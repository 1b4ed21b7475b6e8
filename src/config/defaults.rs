//! Built-in defaults (layer 1)
//!
//! Hardcoded defaults for all configuration values.

use serde::{Deserialize, Serialize};

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Radar document path (default: "radar.json")
    pub radar_path: String,

    /// Notes document path (default: "notes.json")
    pub notes_path: String,

    /// Output indentation in spaces (default: 4)
    pub indent: usize,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            radar_path: "radar.json".to_string(),
            notes_path: "notes.json".to_string(),
            indent: 4,
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "inputs": {
                "radar": self.radar_path,
                "notes": self.notes_path
            },
            "output": {
                "indent": self.indent
            }
        })
    }
}
