use crate::entities::{Board, PlacementReport, ShapeInstance, ShapeType};
use crate::geometry::GeoRelation;
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;
use std::collections::HashMap;
//Various checks to verify the correctness of a placement report
//Used in debug_assertion!() blocks and tests

pub fn report_is_valid(report: &PlacementReport, demand: &[ShapeInstance]) -> bool {
    placements_within_board(report, &report.board)
        && placements_disjoint(report)
        && demand_conserved(report, demand)
        && rotations_legal(report, demand)
        && statistics_consistent(report, demand)
}

/// Every placed bounding box lies within the board
pub fn placements_within_board(report: &PlacementReport, board: &Board) -> bool {
    report.placements.iter().all(|p| {
        let inside = p.x >= 0.0
            && p.y >= 0.0
            && p.x + p.placed_w <= board.width
            && p.y + p.placed_h <= board.height;
        if !inside {
            error!("placement {p:?} exceeds board {board:?}");
        }
        inside
    })
}

/// No two placed bounding boxes share any area
pub fn placements_disjoint(report: &PlacementReport) -> bool {
    report
        .placements
        .iter()
        .tuple_combinations()
        .all(|(a, b)| match a.rect().relation_to(&b.rect()) {
            GeoRelation::Disjoint => true,
            rel => {
                error!("placements {a:?} and {b:?} overlap ({rel:?})");
                false
            }
        })
}

/// Every demanded instance is either placed or unplaced, exactly once
pub fn demand_conserved(report: &PlacementReport, demand: &[ShapeInstance]) -> bool {
    if report.placed_count() + report.unplaced_count() != demand.len() {
        error!(
            "{} placed + {} unplaced != {} demanded",
            report.placed_count(),
            report.unplaced_count(),
            demand.len()
        );
        return false;
    }
    let mut seen = HashMap::new();
    for id in report
        .placements
        .iter()
        .map(|p| p.instance_id)
        .chain(report.unplaced.iter().copied())
    {
        *seen.entry(id).or_insert(0) += 1;
    }
    demand.iter().all(|i| seen.get(&i.id()) == Some(&1))
}

/// No rotated placement for instances which may not rotate, or for squares
pub fn rotations_legal(report: &PlacementReport, demand: &[ShapeInstance]) -> bool {
    report.placements.iter().all(|p| {
        let Some(instance) = demand.iter().find(|i| i.id() == p.instance_id) else {
            error!("placement {p:?} refers to unknown instance");
            return false;
        };
        let legal = match p.rotated {
            false => p.placed_w == instance.bbox_w() && p.placed_h == instance.bbox_h(),
            true => {
                instance.allow_rotation()
                    && instance.shape_type() != ShapeType::Square
                    && p.placed_w == instance.bbox_h()
                    && p.placed_h == instance.bbox_w()
            }
        };
        if !legal {
            error!("placement {p:?} has an illegal orientation for {instance:?}");
        }
        legal
    })
}

/// Used area equals the summed exact areas of the placed instances and the percentages are derived from it
pub fn statistics_consistent(report: &PlacementReport, demand: &[ShapeInstance]) -> bool {
    let expected_used_area = report
        .placements
        .iter()
        .filter_map(|p| demand.iter().find(|i| i.id() == p.instance_id))
        .map(|i| i.exact_area())
        .sum::<f64>();

    approx_eq!(f64, report.used_area, expected_used_area, epsilon = 1e-6)
        && approx_eq!(f64, report.board_area, report.board.area())
        && approx_eq!(
            f64,
            report.utilization_pct,
            100.0 * report.used_area / report.board_area,
            epsilon = 1e-9
        )
        && approx_eq!(
            f64,
            report.waste_pct,
            100.0 - report.utilization_pct,
            epsilon = 1e-9
        )
}
