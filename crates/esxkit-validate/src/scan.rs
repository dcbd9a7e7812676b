//! The single scanning pass over the normalized records.
//!
//! Every condition is independent and non-exclusive: one record may land
//! in several offender categories. The pass visits records in name order
//! so offender lists are deterministic for reporting.

use crate::offenders::OffenderRegistry;
use esxkit_model::{AccessPointRecord, DUPLICATE_NAME_MARKER};
use esxkit_profile::ProjectProfile;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Antenna tilt angles the installer-documentation pipeline can handle.
pub const ACCEPTABLE_TILT_ANGLES: [f64; 11] = [
    0.0, -10.0, -20.0, -30.0, -40.0, -45.0, -50.0, -60.0, -70.0, -80.0, -90.0,
];

/// The authoring tool's untouched antenna height. A record still carrying
/// exactly this value was never deliberately configured.
pub const DEFAULT_ANTENNA_HEIGHT: f64 = 2.4;

/// The "no color assigned" sentinel.
pub const NO_COLOR: &str = "none";

static NAME_CONVENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AP-\d+$").expect("name convention regex is valid"));

/// Whether a name matches the `AP-` prefix + numeric-suffix convention.
pub fn has_conforming_name(name: &str) -> bool {
    NAME_CONVENTION.is_match(name)
}

/// Populate the registry from one pass over the records.
pub fn scan_records(
    records: &HashMap<String, AccessPointRecord>,
    profile: &ProjectProfile,
    offenders: &mut OffenderRegistry,
) {
    let mut names: Vec<&String> = records.keys().collect();
    names.sort();

    for name in names {
        let record = &records[name];

        if !has_conforming_name(&record.name) {
            offenders.name_format.push(record.name.clone());
        }

        if record.name.contains(DUPLICATE_NAME_MARKER) {
            offenders.name_duplication.push(record.name.clone());
        }

        if record.color == NO_COLOR {
            offenders.color.push(record.name.clone());
        }

        if record.antenna_height == DEFAULT_ANTENNA_HEIGHT {
            offenders.antenna_height.push(record.name.clone());
        }

        if record
            .radios
            .values()
            .any(|radio| radio.radio_technology == "BLUETOOTH" && radio.enabled)
        {
            offenders.bluetooth.push(record.name.clone());
        }

        let tilt_acceptable = record
            .antenna_tilt
            .is_some_and(|tilt| ACCEPTABLE_TILT_ANGLES.contains(&tilt));
        if !tilt_acceptable {
            offenders.antenna_tilt.push(record.name.clone());
        }

        if record.antenna_mounting.as_deref() == Some("WALL")
            && record.antenna_tilt == Some(0.0)
        {
            offenders.mount_tilt_mismatch.push(record.name.clone());
        }

        for key in &profile.required_tag_keys {
            if !record.tags.contains_key(key)
                && let Some(bucket) = offenders.missing_required_tags.get_mut(key)
            {
                bucket.push(record.name.clone());
            }
        }

        for key in &profile.optional_tag_keys {
            if !record.tags.contains_key(key)
                && let Some(bucket) = offenders.missing_optional_tags.get_mut(key)
            {
                bucket.push(record.name.clone());
            }
        }
    }
}
