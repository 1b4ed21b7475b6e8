//! Loading and rendering JSON documents.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Document I/O errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("cannot read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("invalid JSON in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("cannot render document: {0}")]
    Render(String),
}

/// Read a whole JSON document into memory.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let contents = fs::read_to_string(path).map_err(|e| DocumentError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value = serde_json::from_str(&contents).map_err(|e| DocumentError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "loaded document");
    Ok(value)
}

/// Pretty-print a document with `indent` spaces per level.
///
/// Non-ASCII text is written as-is, never `\u` escaped.
pub fn render_document(value: &Value, indent: usize) -> Result<String, DocumentError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| DocumentError::Render(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| DocumentError::Render(e.to_string()))
}
