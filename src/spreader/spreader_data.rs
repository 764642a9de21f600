//! Spreader data structures - configuration in, placements out

use cgmath::{Point3, Rad};
use serde::{Deserialize, Serialize};

/// Principal axis held constant while the other two vary to form the
/// ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadAxis {
    X,
    Y,
    Z,
}

/// Winding direction of the ring walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpreadDirection {
    CounterClockwise,
    Clockwise,
}

impl SpreadDirection {
    /// Sign applied to the angular step.
    pub fn sign(self) -> f32 {
        match self {
            SpreadDirection::CounterClockwise => 1.0,
            SpreadDirection::Clockwise => -1.0,
        }
    }
}

/// Ring configuration, passed by value. No mutable state.
///
/// All finite values are accepted: a negative radius mirrors the ring
/// and non-finite inputs pass through the trigonometry untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreaderInput {
    /// Number of positions to generate. 0 yields an empty sequence.
    pub count: u32,
    pub radius: f32,
    /// Angle of the first position.
    pub start_offset: Rad<f32>,
    pub axis: SpreadAxis,
    /// Coordinate held fixed along the spread axis.
    pub axis_value: f32,
    /// Scales the 2*pi/count base step; 1.0 walks exactly one full
    /// revolution over `count` positions.
    pub step_multiplier: f32,
    pub direction: SpreadDirection,
}

impl Default for SpreaderInput {
    // the reference spreader demo: 10 positions, radius 10, two turns
    fn default() -> Self {
        Self {
            count: 10,
            radius: 10.0,
            start_offset: Rad(0.0),
            axis: SpreadAxis::X,
            axis_value: 0.0,
            step_multiplier: 2.0,
            direction: SpreadDirection::CounterClockwise,
        }
    }
}

/// Per-position record handed to the caller's scale function.
///
/// The scale function is treated as opaque: it is invoked
/// synchronously, once per generated position, in position order, and
/// its result never feeds back into subsequent positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleInput {
    pub index: u32,
    pub radius: f32,
    pub angle: Rad<f32>,
    pub axis: SpreadAxis,
    pub direction: SpreadDirection,
}

/// One generated placement: ring position plus caller-computed scale
/// factor, index-aligned to the requested count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadPoint {
    pub position: Point3<f32>,
    pub scale: f32,
}
