//! Scene boundary and batch instancing driver
//!
//! The core never touches the external interchange SDK directly; it
//! talks to a `SceneSink` ("attach node") and lets the excluded
//! transform/export layer do the rest. `CollectedScene` is the
//! in-memory implementation used by tests and demos.

// Boundary trait and in-memory sink
pub mod sink;
// Batch instancing driver
pub mod driver;

pub use driver::generate_instances;
pub use sink::{CollectedScene, SceneInstance, SceneSink};
