//! Tolerant loading of the project document set.
//!
//! Each document is optional: a bundle that lacks `notes.json` simply has no
//! notes. Missing, unreadable, non-UTF-8, and unparsable files all degrade
//! to `None` plus one advisory line through the message sink, so no
//! document-level fault ever reaches the rule engine as an error.

use crate::documents::{
    AccessPointsDoc, AreasDoc, FloorPlansDoc, NotesDoc, PictureNotesDoc, ProjectConfigurationDoc,
    RequirementsDoc, SimulatedRadiosDoc, TagKeysDoc,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const FLOOR_PLANS_FILE: &str = "floorPlans.json";
pub const ACCESS_POINTS_FILE: &str = "accessPoints.json";
pub const SIMULATED_RADIOS_FILE: &str = "simulatedRadios.json";
pub const TAG_KEYS_FILE: &str = "tagKeys.json";
pub const NOTES_FILE: &str = "notes.json";
pub const PICTURE_NOTES_FILE: &str = "pictureNotes.json";
pub const PROJECT_CONFIGURATION_FILE: &str = "projectConfiguration.json";
pub const REQUIREMENTS_FILE: &str = "requirements.json";
pub const AREAS_FILE: &str = "areas.json";

/// The full document set of one unpacked project bundle.
///
/// `None` uniformly means "this project has no data of this kind", whether
/// the file was absent or unreadable.
#[derive(Debug, Clone, Default)]
pub struct ProjectDocuments {
    pub floor_plans: Option<FloorPlansDoc>,
    pub access_points: Option<AccessPointsDoc>,
    pub simulated_radios: Option<SimulatedRadiosDoc>,
    pub tag_keys: Option<TagKeysDoc>,
    pub notes: Option<NotesDoc>,
    pub picture_notes: Option<PictureNotesDoc>,
    pub project_configuration: Option<ProjectConfigurationDoc>,
    pub requirements: Option<RequirementsDoc>,
    pub areas: Option<AreasDoc>,
}

impl ProjectDocuments {
    /// Load every known document from an unpacked project directory.
    pub fn load(project_dir: &Path, sink: &mut dyn FnMut(&str)) -> Self {
        Self {
            floor_plans: load_document(project_dir, FLOOR_PLANS_FILE, sink),
            access_points: load_document(project_dir, ACCESS_POINTS_FILE, sink),
            simulated_radios: load_document(project_dir, SIMULATED_RADIOS_FILE, sink),
            tag_keys: load_document(project_dir, TAG_KEYS_FILE, sink),
            notes: load_document(project_dir, NOTES_FILE, sink),
            picture_notes: load_document(project_dir, PICTURE_NOTES_FILE, sink),
            project_configuration: load_document(project_dir, PROJECT_CONFIGURATION_FILE, sink),
            requirements: load_document(project_dir, REQUIREMENTS_FILE, sink),
            areas: load_document(project_dir, AREAS_FILE, sink),
        }
    }
}

/// Load one JSON document, reporting any fault and returning `None` for it.
pub fn load_document<T: DeserializeOwned>(
    project_dir: &Path,
    filename: &str,
    sink: &mut dyn FnMut(&str),
) -> Option<T> {
    let path = project_dir.join(filename);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(_) => {
            sink(&format!(
                "{filename} not found, project does not contain this data type, continuing."
            ));
            return None;
        }
    };

    let text = match std::str::from_utf8(&bytes) {
        Ok(text) => text,
        Err(err) => {
            sink(&format!("Error decoding {filename}: {err}"));
            return None;
        }
    };

    match serde_json::from_str(text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            sink(&format!("Error parsing JSON in {filename}: {err}"));
            None
        }
    }
}
