//! Sequential instance placement
//!
//! The original generator drove successive placements from
//! process-wide mutable globals (a mesh counter plus position and
//! rotation-axis accumulators). Here that state is an explicit cursor
//! owned by the caller: each `advance` call returns the current slot
//! and steps the cursor, so independent generation runs never share
//! state.

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// Axis a placed instance is rotated around, cycled as placement
/// proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

impl RotationAxis {
    fn next(self) -> RotationAxis {
        match self {
            RotationAxis::X => RotationAxis::Y,
            RotationAxis::Y => RotationAxis::Z,
            RotationAxis::Z => RotationAxis::X,
        }
    }
}

/// One placement slot: name, translation and rotation axis for the
/// next generated instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSlot {
    pub name: String,
    pub translation: Vector3<f32>,
    pub rotation_axis: RotationAxis,
}

/// Placement cursor with the mirror-and-climb walk: x alternates sign,
/// widening by 50 on every other step, y climbs by 30 each step, and
/// the rotation axis advances whenever the spread widens.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementState {
    mesh_number: u32,
    x: f32,
    y: f32,
    z: f32,
    rotation_axis: RotationAxis,
}

impl Default for PlacementState {
    fn default() -> Self {
        Self {
            mesh_number: 1,
            x: 0.0,
            y: 20.0,
            z: 0.0,
            rotation_axis: RotationAxis::Y,
        }
    }
}

impl PlacementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current slot and step the cursor.
    pub fn advance(&mut self) -> PlacementSlot {
        let slot = PlacementSlot {
            name: format!("GenMesh_{}", self.mesh_number),
            translation: Vector3::new(self.x, self.y, self.z),
            rotation_axis: self.rotation_axis,
        };

        self.mesh_number += 1;
        if self.x >= 0.0 {
            self.x = -(self.x + 50.0);
            self.rotation_axis = self.rotation_axis.next();
        } else {
            self.x = -self.x;
        }
        self.y += 30.0;

        slot
    }
}
