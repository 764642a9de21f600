//! Mesh data structures - pure data, no methods
//!
//! Transformations live in `mesh_operations` following DOP principles.

use cgmath::Point3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-corner texture coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

/// Shorthand constructor so UV tables stay readable.
pub const fn uv(u: f32, v: f32) -> Uv {
    Uv { u, v }
}

/// A planar quadrilateral: four vertex indices into the owning mesh's
/// position sequence plus one UV pair per corner, in index order.
///
/// A `QuadFace` value only exists with in-range, distinct indices;
/// validation happens at append time in `mesh_operations`, so there is
/// no "unset" sentinel state to represent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadFace {
    pub indices: [u32; 4],
    pub uvs: [Uv; 4],
}

/// Indexed quad mesh - position sequence, flattened face indices and a
/// face-id lookup map.
///
/// Insertion order defines index identity: position *i* is referenced
/// by index *i*, face *i* occupies flattened slots `4i..4i+4` and key
/// *i* of the lookup map. The flattened sequence and the lookup map
/// are always updated together and must agree in count and content
/// (checked by `verify_face_lookup`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshStructure {
    pub positions: Vec<Point3<f32>>,
    pub quad_faces: Vec<u32>,
    pub face_lookup: FxHashMap<usize, QuadFace>,
}
