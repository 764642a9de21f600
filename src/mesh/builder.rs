//! Deterministic demo-mesh construction
//!
//! Builds known shapes into a fresh `MeshStructure` through the
//! validated append operations. Every generated face duplicates its
//! geometric corners so each face carries independent UVs (and
//! implicitly independent normals); the demo cube is 24 corners, not 8.

use cgmath::Point3;

use super::mesh_data::{uv, MeshStructure, Uv};
use super::mesh_operations::{add_quad_face, add_vertex_position};
use crate::error::{GenError, GenResult};

/// Per-face UV frame shared by every generated quad, walked in winding
/// order: (0,0) -> (1,0) -> (1,1) -> (0,1).
const FACE_UVS: [Uv; 4] = [uv(0.0, 0.0), uv(1.0, 0.0), uv(1.0, 1.0), uv(0.0, 1.0)];

/// The 8 geometric corners of the demo cube (x/z at +-50, y in 0..100).
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-50.0, 0.0, 50.0],
    [50.0, 0.0, 50.0],
    [50.0, 100.0, 50.0],
    [-50.0, 100.0, 50.0],
    [-50.0, 0.0, -50.0],
    [50.0, 0.0, -50.0],
    [50.0, 100.0, -50.0],
    [-50.0, 100.0, -50.0],
];

/// Corner selection per cube face in the fixed +Z, +X, -Z, -X, +Y, -Y
/// creation order, wound right-handed so face normals point outward.
///
/// Face order and winding are a correctness contract: a downstream
/// normal-from-winding computation must yield outward normals, so this
/// table is not free to change.
const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // +Z
    [1, 5, 6, 2], // +X
    [5, 4, 7, 6], // -Z
    [4, 0, 3, 7], // -X
    [3, 2, 6, 7], // +Y
    [1, 0, 4, 5], // -Y
];

/// Build the reference demo cube: 24 vertex entries (each geometric
/// corner duplicated once per adjacent face) and 6 quad faces.
///
/// Do not collapse the duplicated corners into 8 shared vertices; the
/// duplication carries the per-face UV/normal data and downstream
/// shading changes without it.
pub fn build_demo_cube() -> MeshStructure {
    let mut mesh = MeshStructure::default();

    for corners in CUBE_FACES.iter() {
        let mut face_indices = [0u32; 4];
        for (slot, &corner) in corners.iter().enumerate() {
            let p = CUBE_CORNERS[corner];
            face_indices[slot] = add_vertex_position(&mut mesh, Point3::new(p[0], p[1], p[2]));
        }
        // indices were appended just above, so they cannot be out of range
        add_quad_face(&mut mesh, face_indices, FACE_UVS)
            .expect("freshly appended cube indices are valid");
    }

    log::debug!(
        "[build_demo_cube] {} vertices, {} faces",
        mesh.positions.len(),
        mesh.face_lookup.len()
    );
    mesh
}

/// Build a flat `cols` x `rows` quad grid in the X/Y plane with
/// `cell`-sized cells, one quad face per cell wound toward +Z.
///
/// Each cell duplicates its four corners and carries the same UV frame
/// as the cube faces, so neighboring cells share no vertex entries.
pub fn build_gen_mesh(cols: u32, rows: u32, cell: f32) -> GenResult<MeshStructure> {
    if cols == 0 || rows == 0 {
        return Err(GenError::InvalidConfig {
            field: "cols/rows".to_string(),
            reason: "grid dimensions cannot be 0".to_string(),
        });
    }
    if !cell.is_finite() || cell <= 0.0 {
        return Err(GenError::InvalidConfig {
            field: "cell".to_string(),
            reason: format!("cell size must be finite and positive, got {}", cell),
        });
    }

    let mut mesh = MeshStructure::default();
    for row in 0..rows {
        for col in 0..cols {
            let x0 = col as f32 * cell;
            let y0 = row as f32 * cell;
            let x1 = x0 + cell;
            let y1 = y0 + cell;
            // counter-clockwise seen from +Z
            let cell_corners = [
                Point3::new(x0, y0, 0.0),
                Point3::new(x1, y0, 0.0),
                Point3::new(x1, y1, 0.0),
                Point3::new(x0, y1, 0.0),
            ];
            let mut face_indices = [0u32; 4];
            for (slot, corner) in cell_corners.iter().enumerate() {
                face_indices[slot] = add_vertex_position(&mut mesh, *corner);
            }
            add_quad_face(&mut mesh, face_indices, FACE_UVS)
                .expect("freshly appended grid indices are valid");
        }
    }

    log::debug!(
        "[build_gen_mesh] {}x{} grid: {} vertices, {} faces",
        cols,
        rows,
        mesh.positions.len(),
        mesh.face_lookup.len()
    );
    Ok(mesh)
}
