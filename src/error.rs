//! Top-level error type for a merge run.

use radar_fill::ShapeError;

use crate::config::ConfigError;
use crate::document::DocumentError;

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("failed to write output: {0}")]
    Output(String),
}
