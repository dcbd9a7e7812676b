//! The denormalized access-point record join.
//!
//! One record per physical access point, combining the raw access point
//! with its floor-plan display name, split model/antenna, the canonical
//! 5 GHz radio's antenna attributes, the full radio set, and the resolved
//! tag mapping. Records are keyed by name; duplicate source names are
//! renamed with a reserved marker, never dropped.

use crate::documents::{AccessPointsDoc, Radio};
use crate::index::{FloorPlanIndex, LookupError, RadioIndex, TagKeyIndex};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// The radio index designated as the canonical 5 GHz radio; single-valued
/// antenna attributes (tilt, mounting, height) are read from it.
pub const PRIMARY_FIVE_GHZ_RADIO_INDEX: u32 = 1;

/// Reserved token appended (with a counter) to every duplicate name after
/// the first. Detection of renamed records is by substring presence of
/// this marker, so it must never occur in a conforming name.
pub const DUPLICATE_NAME_MARKER: &str = "_BW_DUPLICATE_AP_NAME_";

/// Placeholder used where a dangling reference prevented resolution.
pub const UNKNOWN: &str = "Unknown";

/// The central denormalized entity: one per physical access point.
#[derive(Debug, Clone, Serialize)]
pub struct AccessPointRecord {
    pub name: String,
    pub color: String,
    pub model: String,
    pub antenna: Option<String>,
    pub antenna_description: &'static str,
    pub floor: String,
    pub antenna_tilt: Option<f64>,
    pub antenna_mounting: Option<String>,
    pub antenna_height: f64,
    pub radios: BTreeMap<u32, Radio>,
    pub tags: BTreeMap<String, String>,
}

/// A reference that could not be resolved while joining; the record was
/// still produced with a placeholder and must be reported by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub record_name: String,
    pub fault: DanglingFault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingFault {
    Lookup(LookupError),
    Unplaced,
}

/// The result of one normalization pass.
///
/// The record map carries no ordering guarantee; callers needing a
/// deterministic order must sort explicitly.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    pub records: HashMap<String, AccessPointRecord>,
    pub dangling: Vec<DanglingReference>,
}

/// Split a declared model string on the first `+` into the base model and
/// an optional external-antenna label; no `+` means an integrated antenna.
pub fn split_model_antenna(model: &str) -> (String, Option<String>, &'static str) {
    match model.split_once('+') {
        Some((model, antenna)) => (
            model.trim().to_string(),
            Some(antenna.trim().to_string()),
            "External",
        ),
        None => (model.trim().to_string(), None, "Integrated"),
    }
}

/// Join the raw access points with the lookup indexes into the record map.
///
/// Every raw access point yields exactly one record. Duplicate names are
/// disambiguated by appending [`DUPLICATE_NAME_MARKER`] plus an
/// incrementing counter (the second occurrence gets `_2`). Dangling floor
/// plan and tag key references degrade to placeholders and are returned
/// for the caller to report.
pub fn build_access_point_records(
    access_points: &AccessPointsDoc,
    floor_plans: &FloorPlanIndex,
    radios: &RadioIndex,
    tag_keys: &TagKeyIndex,
) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();
    let mut name_count: HashMap<String, u32> = HashMap::new();

    for ap in &access_points.access_points {
        let (model, antenna, antenna_description) =
            split_model_antenna(ap.model.as_deref().unwrap_or(""));

        let name = match name_count.get_mut(&ap.name) {
            Some(count) => {
                *count += 1;
                format!("{}{DUPLICATE_NAME_MARKER}{count}", ap.name)
            }
            None => {
                name_count.insert(ap.name.clone(), 1);
                ap.name.clone()
            }
        };

        let floor = match &ap.location {
            Some(location) => match floor_plans.display_name(&location.floor_plan_id) {
                Ok(floor_name) => floor_name.to_string(),
                Err(err) => {
                    outcome.dangling.push(DanglingReference {
                        record_name: name.clone(),
                        fault: DanglingFault::Lookup(err),
                    });
                    UNKNOWN.to_string()
                }
            },
            None => {
                outcome.dangling.push(DanglingReference {
                    record_name: name.clone(),
                    fault: DanglingFault::Unplaced,
                });
                UNKNOWN.to_string()
            }
        };

        let mut tags = BTreeMap::new();
        for tag in &ap.tags {
            match tag_keys.key_name(&tag.tag_key_id) {
                Ok(key) => {
                    tags.insert(key.to_string(), tag.value.clone());
                }
                Err(err) => {
                    outcome.dangling.push(DanglingReference {
                        record_name: name.clone(),
                        fault: DanglingFault::Lookup(err),
                    });
                }
            }
        }

        let canonical = radios.radio_at(&ap.id, PRIMARY_FIVE_GHZ_RADIO_INDEX);
        let record = AccessPointRecord {
            name: name.clone(),
            color: ap.color.clone().unwrap_or_else(|| "none".to_string()),
            model,
            antenna,
            antenna_description,
            floor,
            antenna_tilt: canonical.and_then(|radio| radio.antenna_tilt),
            antenna_mounting: canonical.and_then(|radio| radio.antenna_mounting.clone()),
            antenna_height: canonical.and_then(|radio| radio.antenna_height).unwrap_or(0.0),
            radios: radios.radios_for(&ap.id),
            tags,
        };

        outcome.records.insert(name, record);
    }

    outcome
}
