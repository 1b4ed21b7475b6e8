//! Test fixtures for on-disk radar/notes documents
//!
//! Each fixture lives in its own temporary directory so tests can run the
//! pipeline (or the binary) against real files.

#![allow(dead_code)]

use radar_merge::config::{InputPaths, MergeSettings, OutputOptions};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Default radar document name
pub const RADAR_FILE: &str = "radar.json";

/// Default notes document name
pub const NOTES_FILE: &str = "notes.json";

/// A temporary directory holding input documents
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Fixture with radar.json and notes.json already written
    pub fn with_documents(radar: &Value, notes: &Value) -> Self {
        let fixture = Self::new();
        fixture.write_json(RADAR_FILE, radar);
        fixture.write_json(NOTES_FILE, notes);
        fixture
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let contents = serde_json::to_string(value).expect("serialize fixture");
        self.write_raw(name, &contents)
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Settings pointing at this fixture's default documents
    pub fn settings(&self, indent: usize) -> MergeSettings {
        MergeSettings {
            inputs: InputPaths {
                radar: self.dir.path().join(RADAR_FILE),
                notes: self.dir.path().join(NOTES_FILE),
            },
            output: OutputOptions { indent },
        }
    }
}
