//! Radial position spreading
//!
//! A pure geometric utility: given ring parameters, compute N
//! positions at equal (or multiplier-scaled) angular increments around
//! a chosen axis, each annotated with a scale factor from a
//! caller-supplied function. No shared mutable state; every invocation
//! is independent.

// Data structures
pub mod spreader_data;
// Pure functions
pub mod spreader_operations;

pub use spreader_data::{ScaleInput, SpreadAxis, SpreadDirection, SpreadPoint, SpreaderInput};
pub use spreader_operations::position_radial_spreader;
