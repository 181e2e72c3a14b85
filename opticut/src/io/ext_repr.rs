use crate::entities::ShapeType;
use crate::io::svg::Color;
use serde::{Deserialize, Serialize};

/// External representation of a nesting job: a board and the demand lines to nest on it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtJob {
    /// Name of the job
    #[serde(default)]
    pub name: String,
    /// The raw-material board. A default board is used when not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub board: Option<ExtBoard>,
    /// Demand lines, each requesting a quantity of one shape
    #[serde(default)]
    pub demand: Vec<ExtDemand>,
}

/// External representation of a [`Board`](crate::entities::Board).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtBoard {
    pub width: f64,
    pub height: f64,
}

/// A quantity of identical shapes
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtDemand {
    pub shape: ExtShape,
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    /// Whether the shape may be placed rotated by 90°. Allowed if not specified
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    /// Display colour, the default colour of the shape type if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Color>,
}

fn default_quantity() -> usize {
    1
}

fn default_allow_rotation() -> bool {
    true
}

/// External representation of a [`ShapeKind`](crate::entities::ShapeKind)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    Rectangle { w: f64, h: f64 },
    Square { s: f64 },
    Circle { r: f64 },
    /// Right-angled triangle
    Triangle { b: f64, h: f64 },
}

/// External representation of a [`PlacementReport`](crate::entities::PlacementReport)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtReport {
    pub board: ExtBoard,
    /// The cutting list, in placement order
    pub placed_items: Vec<ExtPlacedItem>,
    /// Ids of the instances which could not be placed
    pub unplaced_items: Vec<String>,
    pub unplaced_count: usize,
    pub used_area: f64,
    pub board_area: f64,
    pub utilization_pct: f64,
    pub waste_pct: f64,
    pub solve_time_ms: f64,
}

/// One row of the cutting list.
/// The field names are the column names of the CSV export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub x: f64,
    pub y: f64,
    /// Either 0 or 90 degrees
    pub rotation: u16,
    pub w_box: f64,
    pub h_box: f64,
}
