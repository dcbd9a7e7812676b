//! # Esxkit Model
//!
//! The document layer for Ekahau-style site-survey project bundles.
//!
//! A project bundle unpacks into a directory of loosely-coupled JSON
//! documents (floor plans, access points, simulated radios, tag keys, notes,
//! requirements, areas). This crate owns three jobs:
//!
//! 1. **Tolerant loading** — every document is optional; a missing or
//!    unparsable file degrades to "this project has no data of this kind"
//!    plus a reported message, never an error.
//! 2. **Cross-referencing** — lookup indexes keyed by the documents' own
//!    identifiers, with fallible accessors so dangling references are
//!    detectable instead of silently coerced.
//! 3. **Normalization** — the denormalized [`AccessPointRecord`] join:
//!    one record per physical access point, combining the raw access point
//!    with its floor-plan name, split model/antenna, canonical-radio
//!    attributes, and resolved tag mapping.
//!
//! Document field names and nesting follow the external authoring tool's
//! JSON contract; they are not redesigned here.

pub mod bundle;
pub mod documents;
pub mod index;
pub mod load;
pub mod normalize;
pub mod notes;
pub mod rename;

pub use bundle::{BundleError, repack_project, unpack_project};
pub use documents::{
    AccessPoint, AccessPointsDoc, AreasDoc, Coord, CoverageArea, CoverageRequirement,
    DisplayOption, FloorPlan, FloorPlansDoc, Location, Note, NoteHistory, NotesDoc, PictureNote,
    PictureNotesDoc, ProjectConfiguration, ProjectConfigurationDoc, Radio, RequirementCriterion,
    RequirementsDoc, SimulatedRadiosDoc, TagAssignment, TagKey, TagKeysDoc, criterion_value,
};
pub use index::{FloorPlanIndex, LookupError, RadioIndex, TagKeyIndex};
pub use load::ProjectDocuments;
pub use normalize::{
    AccessPointRecord, DUPLICATE_NAME_MARKER, DanglingFault, DanglingReference, NormalizeOutcome,
    PRIMARY_FIVE_GHZ_RADIO_INDEX, UNKNOWN, build_access_point_records, split_model_antenna,
};
pub use notes::{NoteIndex, PictureNoteSummary, flatten_picture_notes};
pub use rename::{RenameOrder, rename_access_points};
