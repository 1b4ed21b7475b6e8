//! Fill a radar document from a notes document.
//!
//! Both documents map track name -> difficulty -> value. Every pair present
//! in the notes document and missing from the radar document gets a
//! [`DefaultRecord`] wrapping the notes value. Pairs the radar document
//! already has are never touched: radar always wins, with no deep merge.

mod error;
mod record;
mod report;

pub use error::{DocumentKind, ShapeError};
pub use record::{DefaultRecord, RadarKind, DEFAULT_ALL_NOTES};
pub use report::{EntryKey, FillReport};

use serde_json::{Map, Value};
use tracing::debug;

/// Merge `notes` into `radar`, returning the merged document.
///
/// Both roots must be JSON objects. The radar document is consumed and
/// returned augmented; on error it is dropped.
pub fn merge(mut radar: Value, notes: &Value) -> Result<(Value, FillReport), ShapeError> {
    let notes_map = notes
        .as_object()
        .ok_or_else(|| ShapeError::root(DocumentKind::Notes, notes))?;

    let report = match radar.as_object_mut() {
        Some(radar_map) => fill_missing(radar_map, notes_map)?,
        None => return Err(ShapeError::root(DocumentKind::Radar, &radar)),
    };

    Ok((radar, report))
}

/// Insert default records into `radar` for every notes pair it lacks.
///
/// Tracks are visited in the notes document's key order. A notes track with
/// no difficulties still creates an empty track entry in the radar document.
pub fn fill_missing(
    radar: &mut Map<String, Value>,
    notes: &Map<String, Value>,
) -> Result<FillReport, ShapeError> {
    let mut report = FillReport::default();

    for (track, notes_difficulties) in notes {
        let radar_track = radar.entry(track.clone()).or_insert_with(|| {
            report.tracks_added += 1;
            Value::Object(Map::new())
        });
        let radar_difficulties = match radar_track {
            Value::Object(map) => map,
            other => return Err(ShapeError::track(DocumentKind::Radar, track, other)),
        };

        let notes_difficulties = notes_difficulties
            .as_object()
            .ok_or_else(|| ShapeError::track(DocumentKind::Notes, track, notes_difficulties))?;

        for (difficulty, notes_value) in notes_difficulties {
            if radar_difficulties.contains_key(difficulty) {
                debug!(
                    track = %track,
                    difficulty = %difficulty,
                    "radar entry present, notes value discarded"
                );
                report.skipped.push(EntryKey::new(track.as_str(), difficulty.as_str()));
                continue;
            }

            let record = DefaultRecord::from_notes(notes_value.clone());
            radar_difficulties.insert(difficulty.clone(), record.into_value());
            report.entries_inserted += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(value: &Value) -> Vec<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn test_disjoint_tracks() {
        let radar = json!({"SongA": {"Easy": {"x": 1}}});
        let notes = json!({"SongB": {"Hard": 42}});

        let (merged, report) = merge(radar, &notes).unwrap();

        assert_eq!(
            merged,
            json!({
                "SongA": {"Easy": {"x": 1}},
                "SongB": {"Hard": {"ALL_NOTES": 0, "RADAR": {"NOTES": 42}}}
            })
        );
        assert_eq!(report.tracks_added, 1);
        assert_eq!(report.entries_inserted, 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_overlapping_difficulty_radar_wins() {
        let radar = json!({"SongA": {"Easy": {"x": 1}}});
        let notes = json!({"SongA": {"Easy": 99}});

        let (merged, report) = merge(radar, &notes).unwrap();

        assert_eq!(merged, json!({"SongA": {"Easy": {"x": 1}}}));
        assert_eq!(report.entries_inserted, 0);
        assert_eq!(report.skipped, vec![EntryKey::new("SongA", "Easy")]);
        assert!(report.is_noop());
    }

    #[test]
    fn test_new_difficulty_under_existing_track() {
        let radar = json!({"SongA": {"Easy": {"x": 1}}});
        let notes = json!({"SongA": {"Hard": 7}});

        let (merged, report) = merge(radar, &notes).unwrap();

        assert_eq!(
            merged,
            json!({
                "SongA": {
                    "Easy": {"x": 1},
                    "Hard": {"ALL_NOTES": 0, "RADAR": {"NOTES": 7}}
                }
            })
        );
        assert_eq!(report.tracks_added, 0);
        assert_eq!(report.entries_inserted, 1);
    }

    #[test]
    fn test_radar_only_entries_unchanged() {
        let radar = json!({
            "SongA": {"Easy": {"ALL_NOTES": 500, "RADAR": {"NOTES": 10.5, "PEAK": 3.2}}},
            "SongZ": {"Normal": [1, 2, 3]}
        });
        let notes = json!({"SongA": {"Hard": 1}});

        let (merged, _) = merge(radar.clone(), &notes).unwrap();

        assert_eq!(merged["SongA"]["Easy"], radar["SongA"]["Easy"]);
        assert_eq!(merged["SongZ"], radar["SongZ"]);
    }

    #[test]
    fn test_existing_record_never_deep_merged() {
        let radar = json!({"SongA": {"Hard": {"ALL_NOTES": 900, "RADAR": {"CHORD": 4.0}}}});
        let notes = json!({"SongA": {"Hard": 1200}});

        let (merged, _) = merge(radar.clone(), &notes).unwrap();

        assert_eq!(merged, radar);
        assert!(merged["SongA"]["Hard"]["RADAR"].get("NOTES").is_none());
    }

    #[test]
    fn test_idempotent() {
        let radar = json!({"SongA": {"Easy": {"x": 1}}});
        let notes = json!({
            "SongA": {"Easy": 5, "Hard": 7},
            "SongB": {"Normal": {"n": 3}}
        });

        let (once, first) = merge(radar, &notes).unwrap();
        let (twice, second) = merge(once.clone(), &notes).unwrap();

        assert_eq!(once, twice);
        assert!(!first.is_noop());
        assert!(second.is_noop());
        assert_eq!(second.entries_skipped(), 3);
    }

    #[test]
    fn test_key_order_preserved() {
        let radar = json!({"Zeta": {"Hard": 1}, "Alpha": {"Easy": 2}});
        let notes = json!({
            "Mid": {"Normal": 3},
            "Alpha": {"Another": 4, "Easy": 5},
            "Beta": {"Hyper": 6}
        });

        let (merged, _) = merge(radar, &notes).unwrap();

        assert_eq!(keys(&merged), vec!["Zeta", "Alpha", "Mid", "Beta"]);
        assert_eq!(keys(&merged["Alpha"]), vec!["Easy", "Another"]);
    }

    #[test]
    fn test_empty_notes_track_adds_empty_radar_track() {
        let radar = json!({});
        let notes = json!({"SongA": {}});

        let (merged, report) = merge(radar, &notes).unwrap();

        assert_eq!(merged, json!({"SongA": {}}));
        assert_eq!(report.tracks_added, 1);
        assert_eq!(report.entries_inserted, 0);
    }

    #[test]
    fn test_non_ascii_keys_and_values() {
        let radar = json!({});
        let notes = json!({"灼熱 Pt.2 Long Train Running": {"ANOTHER": "ノーツ"}});

        let (merged, _) = merge(radar, &notes).unwrap();

        assert_eq!(
            merged["灼熱 Pt.2 Long Train Running"]["ANOTHER"]["RADAR"]["NOTES"],
            "ノーツ"
        );
    }

    #[test]
    fn test_null_notes_value_kept() {
        let (merged, _) = merge(json!({}), &json!({"SongA": {"Easy": null}})).unwrap();
        assert_eq!(
            merged,
            json!({"SongA": {"Easy": {"ALL_NOTES": 0, "RADAR": {"NOTES": null}}}})
        );
    }

    #[test]
    fn test_radar_root_not_object() {
        let err = merge(json!([1, 2]), &json!({})).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RootNotObject {
                document: DocumentKind::Radar,
                found: "array"
            }
        );
    }

    #[test]
    fn test_notes_root_not_object() {
        let err = merge(json!({}), &json!("notes")).unwrap_err();
        assert!(err.to_string().contains("notes document must be a JSON object"));
    }

    #[test]
    fn test_radar_track_not_object() {
        let err = merge(json!({"SongA": 3}), &json!({"SongA": {"Easy": 1}})).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TrackNotObject {
                document: DocumentKind::Radar,
                track: "SongA".to_string(),
                found: "number"
            }
        );
    }

    #[test]
    fn test_notes_track_not_object() {
        let err = merge(json!({}), &json!({"SongA": [1]})).unwrap_err();
        assert!(err.to_string().contains("notes entry for track 'SongA'"));
    }

    #[test]
    fn test_radar_track_shape_ignored_when_notes_do_not_reference_it() {
        let radar = json!({"Broken": "not a map"});
        let notes = json!({"SongA": {"Easy": 1}});

        let (merged, _) = merge(radar, &notes).unwrap();

        assert_eq!(merged["Broken"], "not a map");
    }
}
