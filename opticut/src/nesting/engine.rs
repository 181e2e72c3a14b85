use crate::entities::{Board, PlacementRecord, PlacementReport, ShapeInstance};
use crate::error::Result;
use crate::geometry::Orientation;
use crate::geometry::primitives::Rect;
use crate::nesting::config::EngineConfig;
use crate::nesting::free_space::FreeSpace;
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::time::Instant;

/// Greedy bounding-box nesting of a demand snapshot onto a single board.
///
/// Items are attempted one by one, largest bounding box first, and each is put at the lower-left
/// corner of the best fitting free region of a [`FreeSpace`]. Items which fit nowhere are reported
/// as unplaced. The engine holds no state between solves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestingEngine {
    pub config: EngineConfig,
}

impl NestingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Nests `demand` onto `board`.
    /// Fails with [`NestError::InvalidBoard`](crate::NestError::InvalidBoard) before attempting any placement if the board is malformed.
    pub fn solve(&self, board: &Board, demand: &[ShapeInstance]) -> Result<PlacementReport> {
        let start = Instant::now();
        let bounds = board.bounds()?;

        let mut free_space = FreeSpace::new(bounds);
        let mut placements = Vec::with_capacity(demand.len());
        let mut unplaced = vec![];
        let mut used_area = 0.0;

        for instance in placement_order(demand) {
            let orientations = allowed_orientations(instance);

            //items too large for the empty board are rejected without searching the free regions
            let fits_board = orientations.iter().any(|o| {
                let (w, h) = o.apply(instance.bbox_w(), instance.bbox_h());
                bounds.fits(w, h)
            });

            let placement = match fits_board {
                false => None,
                true => orientations.iter().find_map(|&o| {
                    let (w, h) = o.apply(instance.bbox_w(), instance.bbox_h());
                    free_space
                        .find(w, h, self.config.fit_heuristic)
                        .map(|region| (region, o, (w, h)))
                }),
            };

            match placement {
                Some((region, orientation, (w, h))) => {
                    let record = PlacementRecord::new(
                        instance.id(),
                        (region.x_min, region.y_min),
                        (w, h),
                        orientation,
                    );
                    let occupied = Rect {
                        x_min: region.x_min,
                        y_min: region.y_min,
                        x_max: region.x_min + w,
                        y_max: region.y_min + h,
                    };
                    free_space.occupy(&occupied);
                    used_area += instance.exact_area();
                    debug!(
                        "[NEST] placed {} {} at {} ({}°), {} free regions",
                        instance.shape_type(),
                        instance.id(),
                        occupied,
                        orientation.degrees(),
                        free_space.regions().len()
                    );
                    placements.push(record);
                }
                None => {
                    debug!(
                        "[NEST] no room for {} {} ({} x {}, fits empty board: {fits_board})",
                        instance.shape_type(),
                        instance.id(),
                        instance.bbox_w(),
                        instance.bbox_h(),
                    );
                    unplaced.push(instance.id());
                }
            }
        }

        let report = PlacementReport::new(
            *board,
            placements,
            unplaced,
            used_area,
            start.elapsed(),
        );

        debug_assert!(assertions::report_is_valid(&report, demand));

        info!(
            "[NEST] nested {}/{} items in {:.3}ms, utilization {:.1}%, waste {:.1}%",
            report.placed_count(),
            demand.len(),
            report.solve_duration.as_secs_f64() * 1000.0,
            report.utilization_pct,
            report.waste_pct
        );

        Ok(report)
    }
}

/// Nests `demand` onto `board` with the default [`EngineConfig`]
pub fn solve(board: &Board, demand: &[ShapeInstance]) -> Result<PlacementReport> {
    NestingEngine::default().solve(board, demand)
}

/// Order in which the instances are attempted: descending bounding box area.
/// The sort is stable, equal areas keep their insertion order.
pub fn placement_order(demand: &[ShapeInstance]) -> impl Iterator<Item = &ShapeInstance> {
    demand
        .iter()
        .sorted_by_key(|i| Reverse(OrderedFloat(i.bbox_area())))
}

/// Natural orientation first, rotated only when allowed and when it changes the bounding box
fn allowed_orientations(instance: &ShapeInstance) -> Vec<Orientation> {
    match instance.can_rotate() {
        true => vec![Orientation::Natural, Orientation::Rotated],
        false => vec![Orientation::Natural],
    }
}
