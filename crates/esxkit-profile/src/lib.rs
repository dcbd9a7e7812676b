//! # Esxkit Profile
//!
//! Organizational validation policy as plain data.
//!
//! A profile declares the tag keys an organization requires on every access
//! point, the coverage requirement its predictive designs must carry, and
//! the filename pattern its project bundles follow. Profiles are values:
//! they come from the fixed built-in registry or from a TOML data file and
//! are passed into the rule engine by reference. No policy logic is ever
//! loaded from the filesystem at runtime.

pub mod metadata;
pub mod registry;

pub use metadata::{ProjectMetadata, parse_project_metadata};
pub use registry::{builtin_profiles, find_profile};

use esxkit_model::RequirementCriterion;
use serde::{Deserialize, Serialize};

/// One organization's validation policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectProfile {
    pub name: String,

    /// Tag keys every access point must carry; absence is a failure.
    #[serde(default)]
    pub required_tag_keys: Vec<String>,

    /// Tag keys worth tracking but not mandatory; absence is a caution.
    #[serde(default)]
    pub optional_tag_keys: Vec<String>,

    /// Regex with named capture groups (`site_id`, `site_location`,
    /// `phase`, `version`) applied to project filenames for metadata
    /// extraction. Not used by the rule engine itself.
    #[serde(default)]
    pub filename_pattern: Option<String>,

    /// The coverage requirement a predictive design is expected to define.
    /// `None` means the profile does not constrain coverage requirements.
    #[serde(default)]
    pub coverage_expectation: Option<CoverageExpectation>,
}

/// The expected default-design coverage requirement: a name, the default
/// flag, and per-criterion values addressed by the
/// (radioTechnology, frequencyBand, type) triple.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageExpectation {
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub criteria: Vec<RequirementCriterion>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ProjectProfile {
    /// Parse a profile from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_from_toml() {
        let profile = ProjectProfile::from_toml_str(
            r#"
            name = "campus"
            required_tag_keys = ["UNIT", "SWITCH"]
            optional_tag_keys = ["PATCH-PANEL"]
            filename_pattern = '^(?P<site_id>[A-Z]{3}\d{2})_(?P<phase>P\d)_v(?P<version>\d+)'

            [coverage_expectation]
            name = "Primary Design"
            is_default = true

            [[coverage_expectation.criteria]]
            radioTechnology = "IEEE802_11"
            frequencyBand = "FIVE"
            type = "SIGNAL_STRENGTH"
            value = -65.0
            "#,
        )
        .expect("profile should parse");

        assert_eq!(profile.name, "campus");
        assert_eq!(profile.required_tag_keys, vec!["UNIT", "SWITCH"]);
        let expectation = profile.coverage_expectation.expect("expectation should parse");
        assert_eq!(expectation.name, "Primary Design");
        assert!(expectation.is_default);
        assert_eq!(expectation.criteria[0].kind, "SIGNAL_STRENGTH");
        assert_eq!(expectation.criteria[0].value, Some(-65.0));
    }

    #[test]
    fn unknown_profile_fields_are_rejected() {
        let result = ProjectProfile::from_toml_str(
            r#"
            name = "campus"
            script_path = "/tmp/evil.py"
            "#,
        );
        assert!(result.is_err());
    }
}
