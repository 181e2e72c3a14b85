#[derive(Debug, PartialEq, Clone, Copy)]
/// Possible relations between two rectangles A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// A ∩ B has a positive area and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// A ∩ B has no area (touching edges count as disjoint)
    Disjoint,
}

/// Orientation in which a bounding box is placed. The engine only ever considers a 90° axis swap.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Orientation {
    Natural,
    Rotated,
}

impl Orientation {
    /// Dimensions of a `(w, h)` bounding box after applying the orientation
    pub fn apply(self, w: f64, h: f64) -> (f64, f64) {
        match self {
            Orientation::Natural => (w, h),
            Orientation::Rotated => (h, w),
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Natural => 0,
            Orientation::Rotated => 90,
        }
    }
}
