use crate::entities::shape::{ShapeGeometry, ShapeKind, ShapeType};
use crate::error::Result;
use crate::io::svg::Color;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a [`ShapeInstance`], unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        InstanceId(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// A single unit of demand: one shape which has to be cut from the board.
/// Immutable once created, the geometry is resolved once by [`ShapeKind::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    id: InstanceId,
    kind: ShapeKind,
    geometry: ShapeGeometry,
    allow_rotation: bool,
    /// Purely cosmetic
    color: Color,
}

impl ShapeInstance {
    pub fn new(kind: ShapeKind, allow_rotation: bool) -> Result<Self> {
        let color = kind.shape_type().default_color();
        ShapeInstance::with_color(kind, allow_rotation, color)
    }

    pub fn with_color(kind: ShapeKind, allow_rotation: bool, color: Color) -> Result<Self> {
        let geometry = kind.resolve()?;
        Ok(ShapeInstance {
            id: InstanceId::next(),
            kind,
            geometry,
            allow_rotation,
            color,
        })
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn bbox_w(&self) -> f64 {
        self.geometry.bbox_w
    }

    pub fn bbox_h(&self) -> f64 {
        self.geometry.bbox_h
    }

    pub fn bbox_area(&self) -> f64 {
        self.geometry.bbox_w * self.geometry.bbox_h
    }

    pub fn exact_area(&self) -> f64 {
        self.geometry.exact_area
    }

    pub fn allow_rotation(&self) -> bool {
        self.allow_rotation
    }

    /// Rotation is only meaningful when it changes the dimensions of the bounding box
    pub fn can_rotate(&self) -> bool {
        self.allow_rotation && self.geometry.bbox_w != self.geometry.bbox_h
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
