//! Shape errors raised while indexing radar and notes documents.

use serde_json::Value;
use std::fmt;

/// Which input document a shape error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Radar,
    Notes,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radar => write!(f, "radar"),
            Self::Notes => write!(f, "notes"),
        }
    }
}

/// A level that must be a JSON object was something else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("{document} document must be a JSON object, found {found}")]
    RootNotObject {
        document: DocumentKind,
        found: &'static str,
    },

    #[error("{document} entry for track '{track}' must be a JSON object, found {found}")]
    TrackNotObject {
        document: DocumentKind,
        track: String,
        found: &'static str,
    },
}

impl ShapeError {
    pub(crate) fn root(document: DocumentKind, value: &Value) -> Self {
        Self::RootNotObject {
            document,
            found: json_type_name(value),
        }
    }

    pub(crate) fn track(document: DocumentKind, track: &str, value: &Value) -> Self {
        Self::TrackNotObject {
            document,
            track: track.to_string(),
            found: json_type_name(value),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
