/// Enums for geometric relations and orientations
pub mod geo_enums;

/// Primitive geometric shapes
pub mod primitives;

#[doc(inline)]
pub use geo_enums::GeoRelation;
#[doc(inline)]
pub use geo_enums::Orientation;
