use crate::error::{NestError, Result};
use crate::io::svg::Color;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Parameter-free tag of a [`ShapeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Square,
    Circle,
    Triangle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Rectangle,
        ShapeType::Square,
        ShapeType::Circle,
        ShapeType::Triangle,
    ];

    /// Colour tag assigned to instances of this type when none is given
    pub fn default_color(self) -> Color {
        match self {
            ShapeType::Rectangle => Color(0x3B, 0x82, 0xF6),
            ShapeType::Square => Color(0x10, 0xB9, 0x81),
            ShapeType::Circle => Color(0xF5, 0x9E, 0x0B),
            ShapeType::Triangle => Color(0x8B, 0x5C, 0xF6),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Square => "Square",
            ShapeType::Circle => "Circle",
            ShapeType::Triangle => "Triangle",
        }
    }
}

impl Display for ShapeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeType {
    type Err = NestError;

    fn from_str(s: &str) -> Result<Self> {
        ShapeType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NestError::InvalidParameter(format!("unknown shape kind: {s:?}")))
    }
}

/// Supported demand shapes, each with its own fixed set of parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Width `w` and height `h`
    Rectangle { w: f64, h: f64 },
    /// Side `s`
    Square { s: f64 },
    /// Radius `r`
    Circle { r: f64 },
    /// Right-angled triangle with base `b` and height `h`
    Triangle { b: f64, h: f64 },
}

/// Geometry derived from a [`ShapeKind`]: its axis-aligned bounding box and its true area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeGeometry {
    pub bbox_w: f64,
    pub bbox_h: f64,
    /// Area of the actual shape, never larger than `bbox_w * bbox_h`
    pub exact_area: f64,
}

impl ShapeKind {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Rectangle { .. } => ShapeType::Rectangle,
            ShapeKind::Square { .. } => ShapeType::Square,
            ShapeKind::Circle { .. } => ShapeType::Circle,
            ShapeKind::Triangle { .. } => ShapeType::Triangle,
        }
    }

    /// Maps the shape onto its bounding box and exact area.
    /// Fails if any parameter is not a positive, finite number.
    pub fn resolve(&self) -> Result<ShapeGeometry> {
        for (name, value) in self.params() {
            if !(value.is_finite() && value > 0.0) {
                return Err(NestError::InvalidParameter(format!(
                    "{}: {name} must be positive and finite, got {value}",
                    self.shape_type()
                )));
            }
        }

        let geometry = match *self {
            ShapeKind::Rectangle { w, h } => ShapeGeometry {
                bbox_w: w,
                bbox_h: h,
                exact_area: w * h,
            },
            ShapeKind::Square { s } => ShapeGeometry {
                bbox_w: s,
                bbox_h: s,
                exact_area: s * s,
            },
            ShapeKind::Circle { r } => ShapeGeometry {
                bbox_w: 2.0 * r,
                bbox_h: 2.0 * r,
                exact_area: PI * r * r,
            },
            ShapeKind::Triangle { b, h } => ShapeGeometry {
                bbox_w: b,
                bbox_h: h,
                exact_area: 0.5 * b * h,
            },
        };
        debug_assert!(geometry.exact_area <= geometry.bbox_w * geometry.bbox_h);
        Ok(geometry)
    }

    /// Named parameters of the shape, in declaration order
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        match *self {
            ShapeKind::Rectangle { w, h } => vec![("w", w), ("h", h)],
            ShapeKind::Square { s } => vec![("s", s)],
            ShapeKind::Circle { r } => vec![("r", r)],
            ShapeKind::Triangle { b, h } => vec![("b", b), ("h", h)],
        }
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.shape_type())?;
        for (i, (name, value)) in self.params().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, ")")
    }
}
