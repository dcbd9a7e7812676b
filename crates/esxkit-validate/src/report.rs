//! Report types and the advisory text banners.
//!
//! Every diagnostic line is advisory text for humans; the only
//! machine-checkable output is the per-check status and the overall
//! verdict.

use serde::Serialize;

pub const SPACER: &str = "\n\n\n";
pub const PASS_BANNER: &str = "----\nPASS\n----\n";
pub const FAIL_BANNER: &str = "----\nFAIL\n----\n";
pub const CAUTION_BANNER: &str = "-------\nCAUTION\n-------\n";
pub const HASH_BAR: &str = "\n\n#########################\n\n";

/// The fixed validator battery, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    NameFormat,
    NameUniqueness,
    ColorAssignment,
    AntennaHeight,
    RequiredTags,
    OptionalTags,
    AntennaTilt,
    MountTiltMismatch,
    MobileViewDisabled,
    FloorPlanCrop,
    RequirementNameUniqueness,
    CoverageRequirementMatch,
    AreaRequirementAssignment,
}

/// Outcome status of one validator.
///
/// `Caution` and `Skipped` surface diagnostics but count as passes;
/// only `Fail` fails the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Caution,
    Fail,
    Skipped,
}

impl CheckStatus {
    pub fn counts_as_pass(self) -> bool {
        !matches!(self, CheckStatus::Fail)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: CheckId,
    pub status: CheckStatus,
}

impl CheckOutcome {
    pub fn new(check: CheckId, status: CheckStatus) -> Self {
        Self { check, status }
    }
}

/// The aggregate of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub outcomes: Vec<CheckOutcome>,
    pub total_access_points: usize,
}

impl ValidationReport {
    /// Overall verdict: pass iff no validator failed.
    pub fn passed(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| outcome.status.counts_as_pass())
    }

    pub fn outcome(&self, check: CheckId) -> Option<CheckStatus> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.check == check)
            .map(|outcome| outcome.status)
    }
}
