use crate::entities::instance::InstanceId;
use crate::geometry::Orientation;
use crate::geometry::primitives::Rect;

/// A [`ShapeInstance`](crate::entities::ShapeInstance) whose bounding box has been placed on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    /// Back-reference to the placed instance, only meant for displaying its original parameters
    pub instance_id: InstanceId,
    /// Lower-left corner of the placed bounding box
    pub x: f64,
    pub y: f64,
    /// Bounding box dimensions after rotation
    pub placed_w: f64,
    pub placed_h: f64,
    pub rotated: bool,
}

impl PlacementRecord {
    /// `placed_w` and `placed_h` are the dimensions of the bounding box after applying `orientation`
    pub fn new(
        instance_id: InstanceId,
        (x, y): (f64, f64),
        (placed_w, placed_h): (f64, f64),
        orientation: Orientation,
    ) -> Self {
        PlacementRecord {
            instance_id,
            x,
            y,
            placed_w,
            placed_h,
            rotated: orientation == Orientation::Rotated,
        }
    }

    /// Either 0 or 90
    pub fn rotation_degrees(&self) -> u16 {
        self.orientation().degrees()
    }

    pub fn orientation(&self) -> Orientation {
        match self.rotated {
            true => Orientation::Rotated,
            false => Orientation::Natural,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.placed_w,
            y_max: self.y + self.placed_h,
        }
    }
}
