//! # Esxkit Validate
//!
//! The validation rule engine for site-survey project bundles.
//!
//! One run is one sequential pass: the normalized access-point records are
//! scanned once to populate the [`OffenderRegistry`], then every validator
//! in the fixed battery executes and reports, then the overall verdict is
//! aggregated. No validator aborts the run; a missing input document skips
//! the validators that need it with a reported diagnostic.
//!
//! Caution verdicts (antenna height, mount/tilt mismatch, optional tags)
//! are surfaced in full but count as passes for aggregation.
//!
//! The engine is synchronous and owns no shared state: separate runs
//! against separate registries are independent.

pub mod checks;
pub mod offenders;
pub mod report;
pub mod runner;
pub mod scan;

pub use offenders::OffenderRegistry;
pub use report::{
    CAUTION_BANNER, CheckId, CheckOutcome, CheckStatus, FAIL_BANNER, HASH_BAR, PASS_BANNER, SPACER,
    ValidationReport,
};
pub use runner::{ValidationRun, run_validation};
pub use scan::{
    ACCEPTABLE_TILT_ANGLES, DEFAULT_ANTENNA_HEIGHT, NO_COLOR, has_conforming_name, scan_records,
};
