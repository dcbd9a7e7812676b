//! Notes and picture notes.
//!
//! Notes are addressable by id and referenced from access points and
//! picture notes. The flattened picture-note summary is the shape consumed
//! by survey exports: one row per picture note with its resolved note text,
//! floor, author, and picture count.

use crate::documents::{NotesDoc, PictureNotesDoc};
use crate::index::FloorPlanIndex;
use chrono::DateTime;
use serde::Serialize;
use std::collections::HashMap;

/// Notes by document id.
#[derive(Debug, Clone, Default)]
pub struct NoteIndex {
    notes: HashMap<String, crate::documents::Note>,
}

impl NoteIndex {
    pub fn build(doc: &NotesDoc) -> Self {
        let notes = doc
            .notes
            .iter()
            .map(|note| (note.id.clone(), note.clone()))
            .collect();
        Self { notes }
    }

    pub fn get(&self, id: &str) -> Option<&crate::documents::Note> {
        self.notes.get(id)
    }

    /// Join the non-empty texts of the referenced notes, newline-separated.
    /// Unknown ids and empty texts are skipped.
    pub fn note_text(&self, note_ids: &[String]) -> String {
        let texts: Vec<&str> = note_ids
            .iter()
            .filter_map(|id| self.notes.get(id))
            .map(|note| note.text.as_str())
            .filter(|text| !text.is_empty())
            .collect();
        texts.join("\n")
    }
}

/// One flattened picture note, sorted by (floor, created-at).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureNoteSummary {
    pub created_at: String,
    pub notes: String,
    pub floor: String,
    pub created_by: Option<String>,
    pub picture_count: usize,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub status: Option<String>,
    pub note_id: Option<String>,
    pub floor_plan_id: Option<String>,
}

/// Flatten the picture notes into export-ready rows.
///
/// The first referenced note supplies the created-at/created-by/status
/// metadata; the picture count sums the image ids across all referenced
/// notes. Timestamps that fail to parse render as empty strings.
pub fn flatten_picture_notes(
    picture_notes: &PictureNotesDoc,
    notes: &NoteIndex,
    floor_plans: &FloorPlanIndex,
) -> Vec<PictureNoteSummary> {
    let mut rows: Vec<PictureNoteSummary> = picture_notes
        .picture_notes
        .iter()
        .map(|picture_note| {
            let floor_plan_id = picture_note
                .location
                .as_ref()
                .map(|location| location.floor_plan_id.clone());
            let floor = floor_plan_id
                .as_deref()
                .and_then(|id| floor_plans.display_name(id).ok())
                .unwrap_or_default()
                .to_string();
            let coord = picture_note.location.as_ref().map(|location| location.coord);

            let picture_count: usize = picture_note
                .note_ids
                .iter()
                .filter_map(|id| notes.get(id))
                .map(|note| note.image_ids.len())
                .sum();

            let first_note = picture_note.note_ids.first().and_then(|id| notes.get(id));
            let history = first_note.and_then(|note| note.history.as_ref());

            PictureNoteSummary {
                created_at: history
                    .and_then(|h| h.created_at.as_deref())
                    .and_then(format_timestamp)
                    .unwrap_or_default(),
                notes: notes.note_text(&picture_note.note_ids),
                floor,
                created_by: history.and_then(|h| h.created_by.clone()),
                picture_count,
                x: coord.map(|c| c.x),
                y: coord.map(|c| c.y),
                status: first_note.and_then(|note| note.status.clone()),
                note_id: picture_note.note_ids.first().cloned(),
                floor_plan_id,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        (a.floor.as_str(), a.created_at.as_str()).cmp(&(b.floor.as_str(), b.created_at.as_str()))
    });
    rows
}

fn format_timestamp(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|stamp| stamp.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::FloorPlansDoc;
    use serde_json::json;

    fn fixtures() -> (PictureNotesDoc, NoteIndex, FloorPlanIndex) {
        let notes: NotesDoc = serde_json::from_value(json!({
            "notes": [
                {
                    "id": "n-1",
                    "text": "Mount above door",
                    "status": "OPEN",
                    "imageIds": ["img-1", "img-2"],
                    "history": {
                        "createdAt": "2024-03-07T09:15:00.000Z",
                        "createdBy": "surveyor"
                    }
                },
                {"id": "n-2", "text": ""},
                {"id": "n-3", "text": "Cable tray runs east"}
            ]
        }))
        .expect("notes should parse");
        let picture_notes: PictureNotesDoc = serde_json::from_value(json!({
            "pictureNotes": [{
                "location": {"floorPlanId": "f1", "coord": {"x": 4.0, "y": 8.0}},
                "noteIds": ["n-1", "n-2", "n-3"]
            }]
        }))
        .expect("picture notes should parse");
        let floor_plans: FloorPlansDoc = serde_json::from_value(json!({
            "floorPlans": [{"id": "f1", "name": "Ground Floor"}]
        }))
        .expect("floor plans should parse");
        (
            picture_notes,
            NoteIndex::build(&notes),
            FloorPlanIndex::build(&floor_plans),
        )
    }

    #[test]
    fn note_text_skips_unknown_and_empty_notes() {
        let (_, notes, _) = fixtures();
        let text = notes.note_text(&[
            "n-1".to_string(),
            "n-2".to_string(),
            "n-404".to_string(),
            "n-3".to_string(),
        ]);
        assert_eq!(text, "Mount above door\nCable tray runs east");
    }

    #[test]
    fn flatten_resolves_floor_metadata_and_picture_count() {
        let (picture_notes, notes, floor_plans) = fixtures();
        let rows = flatten_picture_notes(&picture_notes, &notes, &floor_plans);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.floor, "Ground Floor");
        assert_eq!(row.created_at, "2024-03-07 09:15:00");
        assert_eq!(row.created_by.as_deref(), Some("surveyor"));
        assert_eq!(row.picture_count, 2);
        assert_eq!(row.x, Some(4.0));
        assert_eq!(row.status.as_deref(), Some("OPEN"));
    }

    #[test]
    fn unparsable_timestamp_renders_empty() {
        assert_eq!(format_timestamp("not a date"), None);
        assert_eq!(
            format_timestamp("2024-03-07T09:15:00.000Z").as_deref(),
            Some("2024-03-07 09:15:00")
        );
    }
}
