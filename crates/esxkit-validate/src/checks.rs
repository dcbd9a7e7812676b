//! The validator battery.
//!
//! Each validator is an independent function: it reads the offender
//! registry and/or one input document, writes advisory lines to the
//! message sink, and returns its outcome. The orchestrator in
//! [`crate::runner`] executes all of them in fixed order; nothing here
//! short-circuits across validators (only the crop check short-circuits
//! internally, by contract).
//!
//! Validators that need an absent document report why and return
//! `Skipped`, which counts as a pass.

use crate::offenders::OffenderRegistry;
use crate::report::{
    CAUTION_BANNER, CheckId, CheckOutcome, CheckStatus, FAIL_BANNER, PASS_BANNER, SPACER,
};
use esxkit_model::{
    AccessPointRecord, AreasDoc, CoverageRequirement, FloorPlansDoc, ProjectConfigurationDoc,
    RequirementsDoc, criterion_value,
};
use esxkit_profile::CoverageExpectation;
use std::collections::HashMap;

/// The display option that must not be enabled.
pub const VIEW_AS_MOBILE_OPTION: &str = "view_as_mobile_device_selected";

const FIVE_GHZ_CRITERIA: [(&str, &str); 5] = [
    ("SIGNAL_STRENGTH", "5GHz Primary Signal Strength"),
    ("SECONDARY_SIGNAL_STRENGTH", "5GHz Secondary Signal Strength"),
    ("SIGNAL_TO_NOISE_RATIO", "5GHz Signal to Noise Ratio"),
    ("DATA_RATE", "5GHz Data Rate"),
    ("CHANNEL_OVERLAP", "5GHz Channel Interference"),
];

pub fn check_name_format(
    offenders: &OffenderRegistry,
    total: usize,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### AP NAME FORMATTING ###"));
    if !offenders.name_format.is_empty() {
        sink(&format!(
            "{FAIL_BANNER}The following {} APs have a non-conforming name",
            offenders.name_format.len()
        ));
        for ap in &offenders.name_format {
            sink(ap);
        }
        return CheckOutcome::new(CheckId::NameFormat, CheckStatus::Fail);
    }
    sink(&format!(
        "{PASS_BANNER}All {total} APs have a conforming name format\n"
    ));
    CheckOutcome::new(CheckId::NameFormat, CheckStatus::Pass)
}

pub fn check_name_uniqueness(
    offenders: &OffenderRegistry,
    total: usize,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### AP NAME UNIQUENESS ###"));
    if !offenders.name_duplication.is_empty() {
        sink(&format!(
            "{FAIL_BANNER}The following {} APs have been automatically renamed, please check the original AP names",
            offenders.name_duplication.len()
        ));
        for ap in &offenders.name_duplication {
            sink(ap);
        }
        return CheckOutcome::new(CheckId::NameUniqueness, CheckStatus::Fail);
    }
    sink(&format!("{PASS_BANNER}All {total} APs have a unique name\n"));
    CheckOutcome::new(CheckId::NameUniqueness, CheckStatus::Pass)
}

pub fn check_color_assignment(
    offenders: &OffenderRegistry,
    total: usize,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### COLOUR ASSIGNMENT ###"));
    if !offenders.color.is_empty() {
        sink(&format!(
            "{FAIL_BANNER}The following {} APs have been assigned no color",
            offenders.color.len()
        ));
        for ap in &offenders.color {
            sink(ap);
        }
        return CheckOutcome::new(CheckId::ColorAssignment, CheckStatus::Fail);
    }
    sink(&format!(
        "{PASS_BANNER}All {total} APs have a non-default colour\n"
    ));
    CheckOutcome::new(CheckId::ColorAssignment, CheckStatus::Pass)
}

/// Caution-only: an untouched default height is worth a second look but
/// never fails the run.
pub fn check_antenna_height(
    offenders: &OffenderRegistry,
    total: usize,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### ANTENNA HEIGHT ###"));
    if !offenders.antenna_height.is_empty() {
        sink(&format!(
            "{CAUTION_BANNER}The following {} APs are configured with the Ekahau 'default' height of 2.4 metres, is this intentional?",
            offenders.antenna_height.len()
        ));
        for ap in &offenders.antenna_height {
            sink(ap);
        }
        return CheckOutcome::new(CheckId::AntennaHeight, CheckStatus::Caution);
    }
    sink(&format!(
        "{PASS_BANNER}All {total} APs have an assigned height other than '2.4' metres"
    ));
    CheckOutcome::new(CheckId::AntennaHeight, CheckStatus::Pass)
}

pub fn check_required_tags(
    offenders: &OffenderRegistry,
    total: usize,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### REQUIRED TAGS ###"));
    let mut all_present = true;

    for (tag_key, missing) in &offenders.missing_required_tags {
        if missing.is_empty() {
            continue;
        }
        all_present = false;
        sink(&format!(
            "{FAIL_BANNER}There is a problem! The following {} APs are missing the '{tag_key}' tag",
            missing.len()
        ));
        for ap in missing {
            sink(ap);
        }
    }

    if all_present {
        let defined = offenders.missing_required_tags.len();
        sink(&format!("{PASS_BANNER}{defined} tag keys are defined:"));
        for tag_key in offenders.missing_required_tags.keys() {
            sink(tag_key);
        }
        sink(&format!(
            "All {total} APs have the required {defined} tag keys assigned"
        ));
        return CheckOutcome::new(CheckId::RequiredTags, CheckStatus::Pass);
    }
    CheckOutcome::new(CheckId::RequiredTags, CheckStatus::Fail)
}

/// Caution-only counterpart of the required-tag check for the profile's
/// optional keys. Vacuous when the profile declares none.
pub fn check_optional_tags(
    offenders: &OffenderRegistry,
    total: usize,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    if offenders.missing_optional_tags.is_empty() {
        return CheckOutcome::new(CheckId::OptionalTags, CheckStatus::Pass);
    }

    sink(&format!("{SPACER}### OPTIONAL TAGS ###"));
    let mut all_present = true;
    for (tag_key, missing) in &offenders.missing_optional_tags {
        if missing.is_empty() {
            continue;
        }
        all_present = false;
        sink(&format!(
            "{CAUTION_BANNER}The following {} APs are missing the optional '{tag_key}' tag",
            missing.len()
        ));
        for ap in missing {
            sink(ap);
        }
    }

    if all_present {
        sink(&format!(
            "{PASS_BANNER}All {total} APs have the {} optional tag keys assigned",
            offenders.missing_optional_tags.len()
        ));
        return CheckOutcome::new(CheckId::OptionalTags, CheckStatus::Pass);
    }
    CheckOutcome::new(CheckId::OptionalTags, CheckStatus::Caution)
}

pub fn check_antenna_tilt(
    offenders: &OffenderRegistry,
    total: usize,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### ANTENNA TILT ###"));
    if !offenders.antenna_tilt.is_empty() {
        sink(&format!(
            "{FAIL_BANNER}The following {} APs have an antenna tilt that will cause problems when generating per AP installer documentation",
            offenders.antenna_tilt.len()
        ));
        for ap in &offenders.antenna_tilt {
            sink(ap);
        }
        return CheckOutcome::new(CheckId::AntennaTilt, CheckStatus::Fail);
    }
    sink(&format!(
        "{PASS_BANNER}All {total} APs have an antenna tilt value that will work with the per AP installer documentation generation process\n"
    ));
    CheckOutcome::new(CheckId::AntennaTilt, CheckStatus::Pass)
}

/// Caution-only: wall-mounted with zero tilt is plausible but worth a
/// second look.
pub fn check_mount_tilt_mismatch(
    offenders: &OffenderRegistry,
    total: usize,
    records: &HashMap<String, AccessPointRecord>,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### ANTENNA MOUNTING AND TILT ###"));
    if !offenders.mount_tilt_mismatch.is_empty() {
        sink(&format!(
            "{CAUTION_BANNER}The following {} APs may be configured incorrectly\nThese APs are WALL mounted with 0 degrees of tilt, is this intentional?",
            offenders.mount_tilt_mismatch.len()
        ));
        for ap in &offenders.mount_tilt_mismatch {
            let model = records
                .get(ap)
                .map(|record| record.model.as_str())
                .unwrap_or_default();
            sink(&format!("{ap} | {model}"));
        }
        return CheckOutcome::new(CheckId::MountTiltMismatch, CheckStatus::Caution);
    }
    sink(&format!(
        "{PASS_BANNER}All {total} APs have a conforming antenna mounting and tilt"
    ));
    CheckOutcome::new(CheckId::MountTiltMismatch, CheckStatus::Pass)
}

/// Pass iff the mobile display option is `"false"` or absent; passing
/// projects produce no output for this check.
pub fn check_mobile_view_disabled(
    configuration: Option<&ProjectConfigurationDoc>,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    let Some(configuration) = configuration else {
        sink("projectConfiguration.json unavailable, skipping the mobile view check");
        return CheckOutcome::new(CheckId::MobileViewDisabled, CheckStatus::Skipped);
    };

    let enabled = configuration
        .project_configuration
        .display_options
        .iter()
        .find(|option| option.key == VIEW_AS_MOBILE_OPTION)
        .is_some_and(|option| option.value == "true");

    if enabled {
        sink(&format!("{SPACER}### VIEW AS MOBILE ###"));
        sink(&format!(
            "{FAIL_BANNER}View as mobile is enabled, this is a DISASTER"
        ));
        return CheckOutcome::new(CheckId::MobileViewDisabled, CheckStatus::Fail);
    }
    CheckOutcome::new(CheckId::MobileViewDisabled, CheckStatus::Pass)
}

/// Stop at the first cropped floor plan: one cropped plan already breaks
/// downstream map swaps, and the report stays short. Plans after the
/// first offender are not examined.
pub fn check_floor_plan_crop(
    floor_plans: Option<&FloorPlansDoc>,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    let Some(floor_plans) = floor_plans else {
        sink("floorPlans.json unavailable, skipping the crop check");
        return CheckOutcome::new(CheckId::FloorPlanCrop, CheckStatus::Skipped);
    };

    for floor in &floor_plans.floor_plans {
        if floor.is_cropped() {
            sink(&format!("{SPACER}### MAP CROPPED WITHIN EKAHAU ###"));
            sink(&format!(
                "{FAIL_BANNER}{} has been cropped within Ekahau",
                floor.name
            ));
            sink(
                "This may prevent or complicate post-deployment map creation and seamless map swaps in later phases of the project",
            );
            return CheckOutcome::new(CheckId::FloorPlanCrop, CheckStatus::Fail);
        }
    }
    CheckOutcome::new(CheckId::FloorPlanCrop, CheckStatus::Pass)
}

pub fn check_requirement_name_uniqueness(
    requirements: Option<&RequirementsDoc>,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    let Some(requirements) = requirements else {
        sink("requirements.json unavailable, skipping the coverage requirement name check");
        return CheckOutcome::new(CheckId::RequirementNameUniqueness, CheckStatus::Skipped);
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for requirement in &requirements.requirements {
        *counts.entry(requirement.name.as_str()).or_default() += 1;
    }
    let mut duplicates: Vec<&str> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    duplicates.sort_unstable();

    if !duplicates.is_empty() {
        sink(&format!(
            "{SPACER}### COVERAGE REQUIREMENT NAME UNIQUENESS ###"
        ));
        sink(&format!(
            "{FAIL_BANNER}Duplicate Coverage Requirement names found:"
        ));
        for name in duplicates {
            sink(&format!("  - {name}"));
        }
        return CheckOutcome::new(CheckId::RequirementNameUniqueness, CheckStatus::Fail);
    }
    CheckOutcome::new(CheckId::RequirementNameUniqueness, CheckStatus::Pass)
}

/// Field-by-field comparison of the project's named requirement against
/// the profile's expectation. Every field reports independently; the
/// check fails if any field mismatches or the requirement is absent.
pub fn check_coverage_requirement_match(
    expectation: Option<&CoverageExpectation>,
    requirements: Option<&RequirementsDoc>,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!(
        "{SPACER}### PREDICTIVE DESIGN COVERAGE REQUIREMENTS ###"
    ));

    let Some(expectation) = expectation else {
        sink("Selected project profile does not define 'Predictive Design Coverage Requirements'");
        return CheckOutcome::new(CheckId::CoverageRequirementMatch, CheckStatus::Pass);
    };
    let Some(requirements) = requirements else {
        sink("requirements.json unavailable, skipping the coverage requirement match");
        return CheckOutcome::new(CheckId::CoverageRequirementMatch, CheckStatus::Skipped);
    };

    let Some(requirement) = find_requirement(requirements, &expectation.name) else {
        sink(&format!(
            "{FAIL_BANNER}Coverage Requirement '{}' is not defined\n",
            expectation.name
        ));
        return CheckOutcome::new(CheckId::CoverageRequirementMatch, CheckStatus::Fail);
    };
    sink(&format!(
        "  PASS  - Coverage Requirement '{}' is defined",
        expectation.name
    ));

    let mut field_results = vec![check_default_flag(expectation, requirement, sink)];
    for (kind, descriptor) in FIVE_GHZ_CRITERIA {
        field_results.push(check_criterion(expectation, requirement, kind, descriptor, sink));
    }

    if field_results.iter().all(|pass| *pass) {
        sink(&format!(
            "{PASS_BANNER}All predictive design coverage requirements are configured correctly."
        ));
        return CheckOutcome::new(CheckId::CoverageRequirementMatch, CheckStatus::Pass);
    }
    sink(&format!(
        "{FAIL_BANNER}One or more predictive design coverage requirements are not configured correctly."
    ));
    CheckOutcome::new(CheckId::CoverageRequirementMatch, CheckStatus::Fail)
}

fn find_requirement<'a>(
    requirements: &'a RequirementsDoc,
    name: &str,
) -> Option<&'a CoverageRequirement> {
    requirements
        .requirements
        .iter()
        .find(|requirement| requirement.name == name)
}

fn check_default_flag(
    expectation: &CoverageExpectation,
    requirement: &CoverageRequirement,
    sink: &mut dyn FnMut(&str),
) -> bool {
    let wording = if expectation.is_default {
        "'default'"
    } else {
        "'non-default'"
    };
    if requirement.is_default == expectation.is_default {
        sink(&format!(
            "  PASS  - Coverage Requirement is correctly configured as the {wording}"
        ));
        return true;
    }
    sink(&format!(
        "# FAIL  - Coverage Requirement is NOT configured as {wording}\n"
    ));
    false
}

fn check_criterion(
    expectation: &CoverageExpectation,
    requirement: &CoverageRequirement,
    kind: &str,
    descriptor: &str,
    sink: &mut dyn FnMut(&str),
) -> bool {
    let expected = criterion_value(&expectation.criteria, "IEEE802_11", "FIVE", kind);
    let actual = criterion_value(&requirement.criteria, "IEEE802_11", "FIVE", kind);

    if actual == expected {
        sink(&format!(
            "  PASS  - {descriptor} is correctly configured as '{}'",
            format_value(expected)
        ));
        return true;
    }
    sink(&format!(
        "\n# FAIL  - {descriptor} is NOT configured correctly! Current value: '{}', should be: '{}'\n",
        format_value(actual),
        format_value(expected)
    ));
    false
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{v}"),
        None => "not set".to_string(),
    }
}

/// Every coverage area must be assigned the requirement the profile
/// expects; the first misassigned area fails the check.
pub fn check_area_requirement_assignment(
    expectation: Option<&CoverageExpectation>,
    requirements: Option<&RequirementsDoc>,
    areas: Option<&AreasDoc>,
    sink: &mut dyn FnMut(&str),
) -> CheckOutcome {
    sink(&format!("{SPACER}### AREA REQUIREMENT ASSIGNMENT ###"));

    let Some(expectation) = expectation else {
        sink(
            "Selected project profile does not define 'Predictive Design Coverage Requirements', unable to validate area requirement assignment",
        );
        return CheckOutcome::new(CheckId::AreaRequirementAssignment, CheckStatus::Fail);
    };
    let Some(requirements) = requirements else {
        sink("requirements.json unavailable, skipping the area requirement assignment check");
        return CheckOutcome::new(CheckId::AreaRequirementAssignment, CheckStatus::Skipped);
    };
    let Some(areas) = areas else {
        sink("No coverage areas are defined");
        return CheckOutcome::new(CheckId::AreaRequirementAssignment, CheckStatus::Pass);
    };

    let target_id = find_requirement(requirements, &expectation.name)
        .and_then(|requirement| requirement.requirement_id.clone());

    for area in &areas.areas {
        if area.requirement_id != target_id {
            sink(&format!(
                "{FAIL_BANNER}Area '{}' is not assigned the correct coverage requirement",
                area.name
            ));
            return CheckOutcome::new(CheckId::AreaRequirementAssignment, CheckStatus::Fail);
        }
        sink(&format!(
            "  PASS  - Area '{}' is assigned the correct coverage requirement",
            area.name
        ));
    }

    sink(&format!(
        "{PASS_BANNER}All defined areas are correctly assigned '{}' coverage requirement",
        expectation.name
    ));
    CheckOutcome::new(CheckId::AreaRequirementAssignment, CheckStatus::Pass)
}
