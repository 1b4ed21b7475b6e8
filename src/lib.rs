//! radar-merge - fill a radar dataset from a notes dataset
//!
//! Loads a radar document and a notes document (track -> difficulty -> value),
//! adds a default record for every pair the radar document lacks, and renders
//! the merged result as pretty JSON. The fill itself lives in `radar-fill`;
//! this crate layers configuration, document I/O and the run pipeline on top.

pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;

pub use config::{CliOverrides, ConfigError, EffectiveConfig, MergeSettings};
pub use document::{load_document, render_document, DocumentError};
pub use error::MergeError;
pub use radar_fill::{merge, DefaultRecord, FillReport, RadarKind, ShapeError};
