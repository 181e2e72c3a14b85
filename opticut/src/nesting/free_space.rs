use crate::geometry::primitives::Rect;
use crate::nesting::config::FitHeuristic;
use ordered_float::OrderedFloat;

/// Maximal-rectangles representation of the unoccupied part of a board.
///
/// Every region is a maximal axis-aligned rectangle not covered by any placed box.
/// Regions may overlap each other, but no region lies entirely within another.
#[derive(Debug, Clone)]
pub struct FreeSpace {
    regions: Vec<Rect>,
}

impl FreeSpace {
    pub fn new(bounds: Rect) -> Self {
        FreeSpace {
            regions: vec![bounds],
        }
    }

    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    /// Returns the best free region (according to `heuristic`) that can hold a `w` x `h` box at its lower-left corner.
    pub fn find(&self, w: f64, h: f64, heuristic: FitHeuristic) -> Option<Rect> {
        self.regions
            .iter()
            .filter(|r| r.fits(w, h))
            .min_by_key(|r| score(r, w, h, heuristic))
            .copied()
    }

    /// Removes `placed` from the free space.
    /// Every region overlapping `placed` is replaced by its maximal residual pieces, after which contained regions are pruned.
    pub fn occupy(&mut self, placed: &Rect) {
        let mut residuals = vec![];
        self.regions.retain(|r| match r.collides_with(placed) {
            true => {
                residuals.extend(r.subtract(placed));
                false
            }
            false => true,
        });
        self.regions.extend(residuals);
        self.prune();
    }

    /// Drops every region that lies entirely within another one.
    /// Of two identical regions, the first is kept.
    fn prune(&mut self) {
        let mut i = 0;
        'outer: while i < self.regions.len() {
            let mut j = i + 1;
            while j < self.regions.len() {
                if self.regions[j].surrounds(&self.regions[i]) && self.regions[j] != self.regions[i]
                {
                    self.regions.remove(i);
                    continue 'outer;
                }
                if self.regions[i].surrounds(&self.regions[j]) {
                    self.regions.remove(j);
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }
}

type FitScore = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Lower is better
fn score(region: &Rect, w: f64, h: f64, heuristic: FitHeuristic) -> FitScore {
    let leftover_w = region.width() - w;
    let leftover_h = region.height() - h;
    let (primary, secondary) = match heuristic {
        FitHeuristic::BestAreaFit => (
            region.area() - w * h,
            f64::min(leftover_w, leftover_h),
        ),
        FitHeuristic::BestShortSideFit => (
            f64::min(leftover_w, leftover_h),
            f64::max(leftover_w, leftover_h),
        ),
        FitHeuristic::BottomLeft => (region.y_min, region.x_min),
    };
    (OrderedFloat(primary), OrderedFloat(secondary))
}
