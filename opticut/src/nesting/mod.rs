mod config;
mod engine;
mod free_space;

#[doc(inline)]
pub use config::EngineConfig;
#[doc(inline)]
pub use config::FitHeuristic;
#[doc(inline)]
pub use engine::NestingEngine;
#[doc(inline)]
pub use engine::placement_order;
#[doc(inline)]
pub use engine::solve;
#[doc(inline)]
pub use free_space::FreeSpace;
