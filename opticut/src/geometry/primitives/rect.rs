use crate::geometry::geo_enums::GeoRelation;
use std::fmt::{Display, Formatter};

///Axis-aligned rectangle, in board-local coordinates with the origin at the lower-left corner of the board
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Returns `None` if the rectangle would have no area
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Option<Self> {
        match x_min < x_max && y_min < y_max {
            true => Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            }),
            false => None,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True if a `w` x `h` box anchored at the lower-left corner of `self` stays inside `self`
    #[inline(always)]
    pub fn fits(&self, w: f64, h: f64) -> bool {
        self.x_min + w <= self.x_max && self.y_min + h <= self.y_max
    }

    /// True if `self` and `other` share an area. Rectangles that only touch along an edge do not collide.
    #[inline(always)]
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.x_min < other.x_max
            && other.x_min < self.x_max
            && self.y_min < other.y_max
            && other.y_min < self.y_max
    }

    /// True if `other` lies entirely within `self` (edges may coincide)
    #[inline(always)]
    pub fn surrounds(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Optimized for `GeoRelation::Disjoint`
    #[inline(always)]
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if !self.collides_with(other) {
            return GeoRelation::Disjoint;
        }
        if self.surrounds(other) {
            return GeoRelation::Surrounding;
        }
        if other.surrounds(self) {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Returns the maximal rectangles of `self` which do not overlap with `cut`.
    /// Up to four pieces are returned (left, right, below and above `cut`), each spanning the full extent of `self` in the other dimension.
    /// The pieces overlap each other where they meet.
    pub fn subtract(&self, cut: &Rect) -> impl Iterator<Item = Rect> {
        let pieces = match self.collides_with(cut) {
            false => [Some(*self), None, None, None],
            true => [
                Rect::try_new(self.x_min, self.y_min, cut.x_min, self.y_max),
                Rect::try_new(cut.x_max, self.y_min, self.x_max, self.y_max),
                Rect::try_new(self.x_min, self.y_min, self.x_max, cut.y_min),
                Rect::try_new(self.x_min, cut.y_max, self.x_max, self.y_max),
            ],
        };
        pieces.into_iter().flatten()
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({:.3}, {:.3}), ({:.3}, {:.3})]",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}
