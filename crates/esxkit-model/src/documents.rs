//! Serde types for the external JSON document contract.
//!
//! Field names and nesting are dictated by the authoring tool that writes
//! the bundle. Every field a record might legitimately omit is defaulted,
//! and records that get re-serialized (access points, after renaming) carry
//! a flattened map so unknown fields survive a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `floorPlans.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlansDoc {
    #[serde(default)]
    pub floor_plans: Vec<FloorPlan>,
}

/// A floor plan with the crop rectangle applied by the authoring tool.
///
/// The crop rectangle is expressed against the plan's pixel width/height;
/// `crop == (0, 0, width, height)` means the image is uncropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub crop_min_x: f64,
    #[serde(default)]
    pub crop_min_y: f64,
    #[serde(default)]
    pub crop_max_x: f64,
    #[serde(default)]
    pub crop_max_y: f64,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl FloorPlan {
    /// Whether the crop rectangle differs from the full image rectangle.
    pub fn is_cropped(&self) -> bool {
        self.crop_min_x != 0.0
            || self.crop_min_y != 0.0
            || self.crop_max_x != self.width
            || self.crop_max_y != self.height
    }
}

/// `accessPoints.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPointsDoc {
    #[serde(default)]
    pub access_points: Vec<AccessPoint>,
}

/// A raw access point as authored.
///
/// `model` optionally encodes an external antenna as `"<model> + <antenna>"`.
/// Unplaced access points have no `location`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPoint {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagAssignment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note_ids: Vec<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Placement of an access point (or picture note) on a floor plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub floor_plan_id: String,
    #[serde(default)]
    pub coord: Coord,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A tag key reference plus its value, attached to an access point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAssignment {
    pub tag_key_id: String,
    #[serde(default)]
    pub value: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// `simulatedRadios.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedRadiosDoc {
    #[serde(default)]
    pub simulated_radios: Vec<Radio>,
}

/// A simulated radio, keyed by (access point id, radio index).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Radio {
    pub access_point_id: String,
    #[serde(default)]
    pub access_point_index: u32,
    #[serde(default)]
    pub radio_technology: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antenna_tilt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antenna_mounting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antenna_direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antenna_height: Option<f64>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// `tagKeys.json`: the vocabulary of organizational metadata keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagKeysDoc {
    #[serde(default)]
    pub tag_keys: Vec<TagKey>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagKey {
    pub id: String,
    pub key: String,
}

/// `notes.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesDoc {
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<NoteHistory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// `pictureNotes.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureNotesDoc {
    #[serde(default)]
    pub picture_notes: Vec<PictureNote>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note_ids: Vec<String>,
}

/// `projectConfiguration.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfigurationDoc {
    #[serde(default)]
    pub project_configuration: ProjectConfiguration,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    #[serde(default)]
    pub display_options: Vec<DisplayOption>,
}

/// One display option; values are strings ("true"/"false") in the external
/// contract, not booleans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOption {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// `requirements.json`: named bundles of signal-quality thresholds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsDoc {
    #[serde(default)]
    pub requirements: Vec<CoverageRequirement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub criteria: Vec<RequirementCriterion>,
}

/// One numeric/enumerated criterion, addressed by the
/// (radioTechnology, frequencyBand, type) triple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementCriterion {
    #[serde(default)]
    pub radio_technology: String,
    #[serde(default)]
    pub frequency_band: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Extract the value of the criterion matching a (technology, band, type)
/// triple, if present.
pub fn criterion_value(
    criteria: &[RequirementCriterion],
    radio_technology: &str,
    frequency_band: &str,
    kind: &str,
) -> Option<f64> {
    criteria
        .iter()
        .find(|c| {
            c.radio_technology == radio_technology
                && c.frequency_band == frequency_band
                && c.kind == kind
        })
        .and_then(|c| c.value)
}

/// `areas.json`: coverage areas and their assigned requirement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreasDoc {
    #[serde(default)]
    pub areas: Vec<CoverageArea>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverageArea {
    #[serde(default)]
    pub name: String,
    // The external contract spells this one with a capital ID.
    #[serde(rename = "requirementID", default, skip_serializing_if = "Option::is_none")]
    pub requirement_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn floor_plan_crop_detection() {
        let plan: FloorPlan = serde_json::from_value(json!({
            "id": "f1",
            "name": "Ground Floor",
            "width": 1000.0,
            "height": 800.0,
            "cropMinX": 0.0,
            "cropMinY": 0.0,
            "cropMaxX": 1000.0,
            "cropMaxY": 800.0,
            "imageId": "img-1"
        }))
        .expect("floor plan should parse");
        assert!(!plan.is_cropped());
        assert!(plan.rest.contains_key("imageId"));

        let cropped = FloorPlan {
            crop_min_x: 12.0,
            ..plan
        };
        assert!(cropped.is_cropped());
    }

    #[test]
    fn access_point_round_trip_preserves_unknown_fields() {
        let raw = json!({
            "id": "ap-1",
            "name": "AP-001",
            "color": "#FFE600",
            "model": "AP-655",
            "location": {
                "floorPlanId": "f1",
                "coord": {"x": 10.0, "y": 20.0}
            },
            "tags": [{"tagKeyId": "tk-1", "value": "B12"}],
            "mine": false,
            "vendor": "Aruba"
        });
        let ap: AccessPoint = serde_json::from_value(raw.clone()).expect("ap should parse");
        let back = serde_json::to_value(&ap).expect("ap should serialize");
        assert_eq!(back.get("vendor"), raw.get("vendor"));
        assert_eq!(back.get("mine"), raw.get("mine"));
        assert_eq!(back.get("color"), raw.get("color"));
    }

    #[test]
    fn area_requirement_field_uses_external_spelling() {
        let area: CoverageArea = serde_json::from_value(json!({
            "name": "Warehouse",
            "requirementID": "req-9"
        }))
        .expect("area should parse");
        assert_eq!(area.requirement_id.as_deref(), Some("req-9"));
    }

    #[test]
    fn criterion_value_matches_on_full_triple() {
        let criteria = vec![
            RequirementCriterion {
                radio_technology: "IEEE802_11".to_string(),
                frequency_band: "FIVE".to_string(),
                kind: "SIGNAL_STRENGTH".to_string(),
                value: Some(-65.0),
            },
            RequirementCriterion {
                radio_technology: "IEEE802_11".to_string(),
                frequency_band: "TWO".to_string(),
                kind: "SIGNAL_STRENGTH".to_string(),
                value: Some(-70.0),
            },
        ];
        assert_eq!(
            criterion_value(&criteria, "IEEE802_11", "FIVE", "SIGNAL_STRENGTH"),
            Some(-65.0)
        );
        assert_eq!(
            criterion_value(&criteria, "IEEE802_11", "SIX", "SIGNAL_STRENGTH"),
            None
        );
    }
}
