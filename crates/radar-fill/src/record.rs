//! Radar record types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// `ALL_NOTES` value written into synthesized records.
pub const DEFAULT_ALL_NOTES: u64 = 0;

/// Key of a radar record's `RADAR` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadarKind {
    #[serde(rename = "NOTES")]
    Notes,
    #[serde(rename = "CHORD")]
    Chord,
    #[serde(rename = "PEAK")]
    Peak,
    #[serde(rename = "CHARGE")]
    Charge,
    #[serde(rename = "SCRATCH")]
    Scratch,
    #[serde(rename = "SOF-RAN")]
    SofRan,
}

impl RadarKind {
    /// All radar kinds in display order.
    pub const ALL: [RadarKind; 6] = [
        RadarKind::Notes,
        RadarKind::Chord,
        RadarKind::Peak,
        RadarKind::Charge,
        RadarKind::Scratch,
        RadarKind::SofRan,
    ];

    /// Wire spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RadarKind::Notes => "NOTES",
            RadarKind::Chord => "CHORD",
            RadarKind::Peak => "PEAK",
            RadarKind::Charge => "CHARGE",
            RadarKind::Scratch => "SCRATCH",
            RadarKind::SofRan => "SOF-RAN",
        }
    }

    /// Look up a kind by its wire spelling.
    #[cfg(test)]
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }
}

impl fmt::Display for RadarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record inserted for a (track, difficulty) pair the radar document lacks.
///
/// Serializes as `{"ALL_NOTES": 0, "RADAR": {"NOTES": <notes value>}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultRecord {
    #[serde(rename = "ALL_NOTES")]
    pub all_notes: u64,

    #[serde(rename = "RADAR")]
    pub radar: Map<String, Value>,
}

impl DefaultRecord {
    /// Build the default record around a notes value, kept verbatim.
    pub fn from_notes(notes_value: Value) -> Self {
        let mut radar = Map::new();
        radar.insert(RadarKind::Notes.as_str().to_string(), notes_value);
        Self {
            all_notes: DEFAULT_ALL_NOTES,
            radar,
        }
    }

    /// The notes value carried by this record, if any.
    #[cfg(test)]
    pub(crate) fn notes(&self) -> Option<&Value> {
        self.radar.get(RadarKind::Notes.as_str())
    }

    pub fn into_value(self) -> Value {
        let mut record = Map::new();
        record.insert("ALL_NOTES".to_string(), Value::from(self.all_notes));
        record.insert("RADAR".to_string(), Value::Object(self.radar));
        Value::Object(record)
    }
}
