//! Typed view of the merged configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Settings consumed by the merge pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSettings {
    pub inputs: InputPaths,
    pub output: OutputOptions,
}

/// Locations of the two input documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPaths {
    pub radar: PathBuf,
    pub notes: PathBuf,
}

/// Output rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Spaces per indentation level
    pub indent: usize,
}

/// Values given on the command line (layer 3).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub radar: Option<PathBuf>,
    pub notes: Option<PathBuf>,
    pub indent: Option<usize>,
}

impl CliOverrides {
    /// Convert to a JSON layer, or None when no flag was given.
    pub fn to_value(&self) -> Option<Value> {
        let mut inputs = Map::new();
        if let Some(ref radar) = self.radar {
            inputs.insert("radar".to_string(), path_value(radar));
        }
        if let Some(ref notes) = self.notes {
            inputs.insert("notes".to_string(), path_value(notes));
        }

        let mut layer = Map::new();
        if !inputs.is_empty() {
            layer.insert("inputs".to_string(), Value::Object(inputs));
        }
        if let Some(indent) = self.indent {
            layer.insert("output".to_string(), serde_json::json!({ "indent": indent }));
        }

        if layer.is_empty() {
            None
        } else {
            Some(Value::Object(layer))
        }
    }
}

fn path_value(path: &std::path::Path) -> Value {
    Value::String(path.to_string_lossy().to_string())
}
