//! Fill report types.

use serde::{Deserialize, Serialize};

/// A (track, difficulty) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    pub track: String,
    pub difficulty: String,
}

impl EntryKey {
    pub fn new(track: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// What a fill pass changed.
///
/// Diagnostic only: the merged document is the same whether or not the
/// report is inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    /// Tracks that were absent from the radar document and got an empty entry
    pub tracks_added: usize,

    /// Default records synthesized from notes values
    pub entries_inserted: usize,

    /// Pairs already present in the radar document; their notes values were discarded
    pub skipped: Vec<EntryKey>,
}

impl FillReport {
    pub fn entries_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// True when the pass left the radar document unchanged.
    pub fn is_noop(&self) -> bool {
        self.tracks_added == 0 && self.entries_inserted == 0
    }
}
