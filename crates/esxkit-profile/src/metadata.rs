//! Project filename metadata extraction.
//!
//! Profiles may declare a regex whose named capture groups identify the
//! site id, site location, project phase, and version encoded in a project
//! filename. No match yields an all-`None` result rather than an error.

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    pub site_id: Option<String>,
    pub site_location: Option<String>,
    pub project_phase: Option<String>,
    pub project_version: Option<String>,
}

/// Apply a profile's filename pattern to a project filename.
///
/// Returns the default (all-`None`) metadata when the pattern is absent,
/// invalid, or does not match.
pub fn parse_project_metadata(filename: &str, pattern: Option<&str>) -> ProjectMetadata {
    let Some(pattern) = pattern else {
        return ProjectMetadata::default();
    };
    let Ok(regex) = Regex::new(pattern) else {
        return ProjectMetadata::default();
    };
    let Some(captures) = regex.captures(filename) else {
        return ProjectMetadata::default();
    };

    let group = |name: &str| captures.name(name).map(|m| m.as_str().to_string());
    ProjectMetadata {
        site_id: group("site_id"),
        site_location: group("site_location"),
        project_phase: group("phase"),
        project_version: group("version"),
    }
}
