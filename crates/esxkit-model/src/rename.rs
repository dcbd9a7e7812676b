//! Sequential access-point renaming.
//!
//! Renaming sorts the access points with one of a fixed set of strategies
//! and assigns `AP-001`, `AP-002`, … in that order. The strategy set is
//! statically registered; no ordering logic is ever loaded from the
//! filesystem.

use crate::documents::AccessPointsDoc;
use crate::index::FloorPlanIndex;
use crate::normalize::split_model_antenna;
use std::cmp::Ordering;

/// The fixed set of rename sort strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOrder {
    /// Floor-plan name, then X coordinate, then Y coordinate.
    FloorThenCoordinate,
    /// Floor-plan name, then the current access-point name.
    FloorThenName,
}

impl RenameOrder {
    pub const ALL: [RenameOrder; 2] = [RenameOrder::FloorThenCoordinate, RenameOrder::FloorThenName];

    pub fn name(self) -> &'static str {
        match self {
            RenameOrder::FloorThenCoordinate => "floor-then-coordinate",
            RenameOrder::FloorThenName => "floor-then-name",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.name() == raw)
    }
}

/// Rename every access point in document order of the selected strategy.
///
/// Each rename is reported through the sink; returns the number of access
/// points renamed. Unplaced access points and dangling floor references
/// sort under an empty floor name rather than being skipped.
pub fn rename_access_points(
    doc: &mut AccessPointsDoc,
    order: RenameOrder,
    floor_plans: &FloorPlanIndex,
    sink: &mut dyn FnMut(&str),
) -> usize {
    let floor_of = |ap: &crate::documents::AccessPoint| -> String {
        ap.location
            .as_ref()
            .and_then(|location| floor_plans.display_name(&location.floor_plan_id).ok())
            .unwrap_or_default()
            .to_string()
    };

    doc.access_points.sort_by(|a, b| {
        let by_floor = floor_of(a).cmp(&floor_of(b));
        if by_floor != Ordering::Equal {
            return by_floor;
        }
        match order {
            RenameOrder::FloorThenCoordinate => {
                let coord_a = a.location.as_ref().map(|l| l.coord).unwrap_or_default();
                let coord_b = b.location.as_ref().map(|l| l.coord).unwrap_or_default();
                coord_a
                    .x
                    .total_cmp(&coord_b.x)
                    .then(coord_a.y.total_cmp(&coord_b.y))
            }
            RenameOrder::FloorThenName => a.name.cmp(&b.name),
        }
    });

    let mut sequence = 1u32;
    for ap in &mut doc.access_points {
        let new_name = format!("AP-{sequence:03}");
        let (model, _, _) = split_model_antenna(ap.model.as_deref().unwrap_or(""));
        sink(&format!(
            "{} ][ {} from: {} ][ renamed: {new_name}",
            ap.name,
            model,
            floor_of(ap)
        ));
        ap.name = new_name;
        sequence += 1;
    }

    doc.access_points.len()
}
