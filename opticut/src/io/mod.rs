/// External (serializable) representations of jobs and reports.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting reports into external representations and the CSV cutting list
pub mod export;

/// All logic for drawing [`PlacementReport`](crate::entities::PlacementReport)s as SVG
pub mod svg;
