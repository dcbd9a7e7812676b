//! The built-in profile registry.
//!
//! A fixed, statically-registered set of profiles returned by value.
//! Organizations with policies beyond these ship a TOML profile file
//! instead; there is no runtime discovery of profile code.

use crate::{CoverageExpectation, ProjectProfile};
use esxkit_model::RequirementCriterion;

/// Names of the built-in profiles, in presentation order.
pub const BUILTIN_PROFILE_NAMES: &[&str] = &["baseline", "acme-office"];

/// All built-in profiles.
pub fn builtin_profiles() -> Vec<ProjectProfile> {
    BUILTIN_PROFILE_NAMES
        .iter()
        .filter_map(|name| find_profile(name))
        .collect()
}

/// Look up one built-in profile by name.
pub fn find_profile(name: &str) -> Option<ProjectProfile> {
    match name {
        "baseline" => Some(ProjectProfile {
            name: "baseline".to_string(),
            ..ProjectProfile::default()
        }),
        "acme-office" => Some(ProjectProfile {
            name: "acme-office".to_string(),
            required_tag_keys: vec!["UNIT".to_string(), "SWITCH".to_string()],
            optional_tag_keys: vec!["PATCH-PANEL".to_string()],
            filename_pattern: Some(
                r"^(?P<site_id>[A-Z]{3}\d{2})_(?P<site_location>[A-Za-z-]+)_(?P<phase>P\d)_v(?P<version>\d+)"
                    .to_string(),
            ),
            coverage_expectation: Some(CoverageExpectation {
                name: "Primary Design".to_string(),
                is_default: true,
                criteria: vec![
                    five_ghz("SIGNAL_STRENGTH", -65.0),
                    five_ghz("SECONDARY_SIGNAL_STRENGTH", -67.0),
                    five_ghz("SIGNAL_TO_NOISE_RATIO", 20.0),
                    five_ghz("DATA_RATE", 24.0),
                    five_ghz("CHANNEL_OVERLAP", 0.0),
                ],
            }),
        }),
        _ => None,
    }
}

fn five_ghz(kind: &str, value: f64) -> RequirementCriterion {
    RequirementCriterion {
        radio_technology: "IEEE802_11".to_string(),
        frequency_band: "FIVE".to_string(),
        kind: kind.to_string(),
        value: Some(value),
    }
}
