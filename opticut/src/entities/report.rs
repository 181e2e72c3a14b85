use crate::entities::board::Board;
use crate::entities::instance::InstanceId;
use crate::entities::placement::PlacementRecord;
use std::time::Duration;

/// Result of one solve. Created at once by the engine and never updated afterwards.
#[derive(Debug, Clone)]
pub struct PlacementReport {
    /// The board the demand was nested on
    pub board: Board,
    /// Placements in the order they were made
    pub placements: Vec<PlacementRecord>,
    /// Instances which did not fit, in the order they were attempted
    pub unplaced: Vec<InstanceId>,
    /// Sum of the exact areas (not the bounding box areas) of all placed instances
    pub used_area: f64,
    pub board_area: f64,
    pub utilization_pct: f64,
    pub waste_pct: f64,
    pub solve_duration: Duration,
}

impl PlacementReport {
    pub fn new(
        board: Board,
        placements: Vec<PlacementRecord>,
        unplaced: Vec<InstanceId>,
        used_area: f64,
        solve_duration: Duration,
    ) -> Self {
        let board_area = board.area();
        let utilization_pct = 100.0 * used_area / board_area;
        PlacementReport {
            board,
            placements,
            unplaced,
            used_area,
            board_area,
            utilization_pct,
            waste_pct: 100.0 - utilization_pct,
            solve_duration,
        }
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    pub fn placement_of(&self, id: InstanceId) -> Option<&PlacementRecord> {
        self.placements.iter().find(|p| p.instance_id == id)
    }

    /// Sum of the areas of the placed bounding boxes, which is what the engine actually packed
    pub fn bbox_area(&self) -> f64 {
        self.placements
            .iter()
            .map(|p| p.placed_w * p.placed_h)
            .sum()
    }

    /// True if both reports contain the same placements, the same unplaced instances and the same statistics.
    /// The solve duration is ignored.
    pub fn same_outcome(&self, other: &PlacementReport) -> bool {
        self.board == other.board
            && self.placements == other.placements
            && self.unplaced == other.unplaced
            && self.used_area == other.used_area
            && self.utilization_pct == other.utilization_pct
            && self.waste_pct == other.waste_pct
    }
}
