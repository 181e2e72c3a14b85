mod board;
mod demand;
mod instance;
mod placement;
mod report;
mod shape;

#[doc(inline)]
pub use board::Board;
#[doc(inline)]
pub use demand::DemandQueue;
#[doc(inline)]
pub use instance::InstanceId;
#[doc(inline)]
pub use instance::ShapeInstance;
#[doc(inline)]
pub use placement::PlacementRecord;
#[doc(inline)]
pub use report::PlacementReport;
#[doc(inline)]
pub use shape::ShapeGeometry;
#[doc(inline)]
pub use shape::ShapeKind;
#[doc(inline)]
pub use shape::ShapeType;
