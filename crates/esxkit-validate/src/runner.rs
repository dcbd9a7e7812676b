//! The validation orchestrator.
//!
//! One call runs the whole sequence: build the lookup indexes, normalize
//! the access points, report dangling references, scan once into the
//! offender registry, execute every validator in order, and emit the
//! overall banner. The derived records and the populated registry are
//! returned for downstream consumers (list export, map annotation).

use crate::checks::{
    check_antenna_height, check_antenna_tilt, check_area_requirement_assignment,
    check_color_assignment, check_coverage_requirement_match, check_floor_plan_crop,
    check_mobile_view_disabled, check_mount_tilt_mismatch, check_name_format,
    check_name_uniqueness, check_optional_tags, check_requirement_name_uniqueness,
    check_required_tags,
};
use crate::offenders::OffenderRegistry;
use crate::report::{HASH_BAR, ValidationReport};
use crate::scan::scan_records;
use esxkit_model::{
    AccessPointRecord, DanglingFault, FloorPlanIndex, ProjectDocuments, RadioIndex, TagKeyIndex,
    build_access_point_records,
};
use esxkit_profile::ProjectProfile;
use std::collections::HashMap;

/// Everything one validation run produces.
#[derive(Debug)]
pub struct ValidationRun {
    pub report: ValidationReport,
    pub records: HashMap<String, AccessPointRecord>,
    pub offenders: OffenderRegistry,
}

/// Run the full validator battery over a loaded document set.
pub fn run_validation(
    project_name: &str,
    docs: &ProjectDocuments,
    profile: &ProjectProfile,
    sink: &mut dyn FnMut(&str),
) -> ValidationRun {
    sink(&format!("Performing Validation for: {project_name}"));

    let floor_plans = docs
        .floor_plans
        .as_ref()
        .map(FloorPlanIndex::build)
        .unwrap_or_default();
    let radios = docs
        .simulated_radios
        .as_ref()
        .map(RadioIndex::build)
        .unwrap_or_default();
    let tag_keys = docs
        .tag_keys
        .as_ref()
        .map(TagKeyIndex::build)
        .unwrap_or_default();

    let normalized = match docs.access_points.as_ref() {
        Some(access_points) => {
            build_access_point_records(access_points, &floor_plans, &radios, &tag_keys)
        }
        None => Default::default(),
    };
    for dangling in &normalized.dangling {
        match &dangling.fault {
            DanglingFault::Lookup(err) => {
                sink(&format!("'{}': {err}", dangling.record_name));
            }
            DanglingFault::Unplaced => {
                sink(&format!(
                    "'{}' is not placed on any floor plan",
                    dangling.record_name
                ));
            }
        }
    }

    let mut offenders =
        OffenderRegistry::new(&profile.required_tag_keys, &profile.optional_tag_keys);
    scan_records(&normalized.records, profile, &mut offenders);

    let records = normalized.records;
    let total = records.len();
    let expectation = profile.coverage_expectation.as_ref();

    let outcomes = vec![
        check_name_format(&offenders, total, sink),
        check_name_uniqueness(&offenders, total, sink),
        check_color_assignment(&offenders, total, sink),
        check_antenna_height(&offenders, total, sink),
        check_required_tags(&offenders, total, sink),
        check_optional_tags(&offenders, total, sink),
        check_antenna_tilt(&offenders, total, sink),
        check_mount_tilt_mismatch(&offenders, total, &records, sink),
        check_mobile_view_disabled(docs.project_configuration.as_ref(), sink),
        check_floor_plan_crop(docs.floor_plans.as_ref(), sink),
        check_requirement_name_uniqueness(docs.requirements.as_ref(), sink),
        check_coverage_requirement_match(expectation, docs.requirements.as_ref(), sink),
        check_area_requirement_assignment(
            expectation,
            docs.requirements.as_ref(),
            docs.areas.as_ref(),
            sink,
        ),
    ];

    let report = ValidationReport {
        outcomes,
        total_access_points: total,
    };
    if report.passed() {
        sink(&format!("{HASH_BAR}### VALIDATION PASSED ###{HASH_BAR}"));
    } else {
        sink(&format!("{HASH_BAR}### VALIDATION FAILED ###{HASH_BAR}"));
    }

    ValidationRun {
        report,
        records,
        offenders,
    }
}
