//! Lookup indexes over the raw documents.
//!
//! Identifier lookups are fallible so that a dangling reference is a
//! detectable condition for the caller, not a silent default. Consumers
//! that want degraded-but-running behavior (the normalizer, map
//! annotation) catch the error, substitute a placeholder, and report.

use crate::documents::{FloorPlan, FloorPlansDoc, Radio, SimulatedRadiosDoc, TagKeysDoc};
use std::collections::{BTreeMap, HashMap};

/// A reference to an identifier with no entry in the target document.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no floor plan with id {0}")]
    UnknownFloorPlan(String),

    #[error("no tag key with id {0}")]
    UnknownTagKey(String),
}

/// Floor plans by document id.
#[derive(Debug, Clone, Default)]
pub struct FloorPlanIndex {
    plans: HashMap<String, FloorPlan>,
}

impl FloorPlanIndex {
    pub fn build(doc: &FloorPlansDoc) -> Self {
        let plans = doc
            .floor_plans
            .iter()
            .map(|plan| (plan.id.clone(), plan.clone()))
            .collect();
        Self { plans }
    }

    pub fn get(&self, id: &str) -> Option<&FloorPlan> {
        self.plans.get(id)
    }

    /// Resolve the display name of a floor plan.
    ///
    /// An access point referencing an id absent from this index is a
    /// data-integrity fault the caller must be able to detect.
    pub fn display_name(&self, id: &str) -> Result<&str, LookupError> {
        self.plans
            .get(id)
            .map(|plan| plan.name.as_str())
            .ok_or_else(|| LookupError::UnknownFloorPlan(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Tag key id -> symbolic key name.
#[derive(Debug, Clone, Default)]
pub struct TagKeyIndex {
    keys: HashMap<String, String>,
}

impl TagKeyIndex {
    pub fn build(doc: &TagKeysDoc) -> Self {
        let keys = doc
            .tag_keys
            .iter()
            .map(|tag_key| (tag_key.id.clone(), tag_key.key.clone()))
            .collect();
        Self { keys }
    }

    pub fn key_name(&self, id: &str) -> Result<&str, LookupError> {
        self.keys
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownTagKey(id.to_string()))
    }
}

/// Radios grouped by access point id, then by radio index.
///
/// The inner map is ordered by index so a record's radio set iterates
/// deterministically.
#[derive(Debug, Clone, Default)]
pub struct RadioIndex {
    radios: HashMap<String, BTreeMap<u32, Radio>>,
}

impl RadioIndex {
    pub fn build(doc: &SimulatedRadiosDoc) -> Self {
        let mut radios: HashMap<String, BTreeMap<u32, Radio>> = HashMap::new();
        for radio in &doc.simulated_radios {
            radios
                .entry(radio.access_point_id.clone())
                .or_default()
                .insert(radio.access_point_index, radio.clone());
        }
        Self { radios }
    }

    /// All radios of one access point, empty when it has none.
    pub fn radios_for(&self, access_point_id: &str) -> BTreeMap<u32, Radio> {
        self.radios.get(access_point_id).cloned().unwrap_or_default()
    }

    /// The radio at a specific index on an access point.
    pub fn radio_at(&self, access_point_id: &str, index: u32) -> Option<&Radio> {
        self.radios.get(access_point_id)?.get(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{TagKey, TagKeysDoc};
    use serde_json::json;

    fn radios_doc() -> SimulatedRadiosDoc {
        serde_json::from_value(json!({
            "simulatedRadios": [
                {
                    "accessPointId": "ap-1",
                    "accessPointIndex": 0,
                    "radioTechnology": "IEEE802_11",
                    "enabled": true
                },
                {
                    "accessPointId": "ap-1",
                    "accessPointIndex": 1,
                    "radioTechnology": "IEEE802_11",
                    "enabled": true,
                    "antennaTilt": -20.0,
                    "antennaMounting": "CEILING",
                    "antennaHeight": 3.1
                }
            ]
        }))
        .expect("radios should parse")
    }

    #[test]
    fn floor_plan_lookup_detects_dangling_reference() {
        let doc: FloorPlansDoc = serde_json::from_value(json!({
            "floorPlans": [{"id": "f1", "name": "Mezzanine"}]
        }))
        .expect("floor plans should parse");
        let index = FloorPlanIndex::build(&doc);

        assert_eq!(index.display_name("f1"), Ok("Mezzanine"));
        assert_eq!(
            index.display_name("f9"),
            Err(LookupError::UnknownFloorPlan("f9".to_string()))
        );
    }

    #[test]
    fn tag_key_lookup_detects_dangling_reference() {
        let doc = TagKeysDoc {
            tag_keys: vec![TagKey {
                id: "tk-1".to_string(),
                key: "UNIT".to_string(),
            }],
        };
        let index = TagKeyIndex::build(&doc);

        assert_eq!(index.key_name("tk-1"), Ok("UNIT"));
        assert!(matches!(
            index.key_name("tk-2"),
            Err(LookupError::UnknownTagKey(_))
        ));
    }

    #[test]
    fn radio_index_groups_by_compound_key() {
        let index = RadioIndex::build(&radios_doc());

        let canonical = index.radio_at("ap-1", 1).expect("radio should exist");
        assert_eq!(canonical.antenna_tilt, Some(-20.0));
        assert_eq!(canonical.antenna_mounting.as_deref(), Some("CEILING"));
        assert!(index.radio_at("ap-1", 2).is_none());
        assert!(index.radio_at("ap-2", 1).is_none());
        assert_eq!(index.radios_for("ap-1").len(), 2);
        assert!(index.radios_for("ap-2").is_empty());
    }
}
