//! The offender registry: a category-complete accumulator of rule
//! violations.
//!
//! Construction pre-seeds every fixed category and one missing-tag bucket
//! per declared tag key, so validators never guard against absent
//! categories: an empty list is the all-clear state. The scanning pass is
//! the registry's only writer; validators only read.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct OffenderRegistry {
    /// Names not matching the required prefix + numeric-suffix convention.
    pub name_format: Vec<String>,
    /// Names carrying the reserved duplication marker.
    pub name_duplication: Vec<String>,
    /// Records with the "none" color sentinel.
    pub color: Vec<String>,
    /// Records whose canonical radio still has the tool's default height.
    pub antenna_height: Vec<String>,
    /// Records with an enabled Bluetooth radio.
    pub bluetooth: Vec<String>,
    /// Records whose canonical tilt is outside the acceptable angle set.
    pub antenna_tilt: Vec<String>,
    /// Wall-mounted records with zero tilt.
    pub mount_tilt_mismatch: Vec<String>,
    /// Per required tag key: records missing that tag.
    pub missing_required_tags: BTreeMap<String, Vec<String>>,
    /// Per optional tag key: records missing that tag.
    pub missing_optional_tags: BTreeMap<String, Vec<String>>,
}

impl OffenderRegistry {
    /// Build an empty registry shaped for the active profile's tag keys.
    pub fn new(required_tag_keys: &[String], optional_tag_keys: &[String]) -> Self {
        let mut registry = Self::default();
        for key in required_tag_keys {
            registry
                .missing_required_tags
                .insert(key.clone(), Vec::new());
        }
        for key in optional_tag_keys {
            registry
                .missing_optional_tags
                .insert(key.clone(), Vec::new());
        }
        registry
    }
}
