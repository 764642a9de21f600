//! Pure functions over `MeshStructure`
//!
//! Validated construction plus the read access the transform/export
//! boundary uses: faces are iterated in stored order through either
//! the flattened sequence or the lookup map, and both paths must agree.

use cgmath::Point3;

use super::mesh_data::{MeshStructure, QuadFace, Uv};
use crate::error::{GenError, GenResult};

/// Append a vertex position, returning its assigned index (the
/// sequence length before insertion).
///
/// No deduplication: callers supply one entry per face corner when
/// corners need independent UVs, mirroring the 24-corner demo cube.
pub fn add_vertex_position(mesh: &mut MeshStructure, position: Point3<f32>) -> u32 {
    let index = mesh.positions.len() as u32;
    mesh.positions.push(position);
    index
}

/// Append a quad face referencing four existing, distinct vertices.
///
/// On success the flattened index sequence and the lookup map are
/// updated together (never one without the other) and the new face id
/// is returned. On failure the mesh is left unchanged - no partial
/// face is inserted.
pub fn add_quad_face(
    mesh: &mut MeshStructure,
    indices: [u32; 4],
    uvs: [Uv; 4],
) -> GenResult<usize> {
    let vertex_count = mesh.positions.len();
    for &index in &indices {
        if index as usize >= vertex_count {
            return Err(GenError::InvalidIndex {
                index,
                vertex_count,
            });
        }
    }
    for a in 0..4 {
        for b in (a + 1)..4 {
            if indices[a] == indices[b] {
                return Err(GenError::DegenerateFace { indices });
            }
        }
    }

    let face_id = mesh.face_lookup.len();
    mesh.quad_faces.extend_from_slice(&indices);
    mesh.face_lookup.insert(face_id, QuadFace { indices, uvs });
    Ok(face_id)
}

/// Number of vertex positions in the mesh.
pub fn vertex_count(mesh: &MeshStructure) -> usize {
    mesh.positions.len()
}

/// Number of quad faces in the mesh.
pub fn face_count(mesh: &MeshStructure) -> usize {
    mesh.quad_faces.len() / 4
}

/// Look up a face by id without scanning the flattened sequence.
pub fn face(mesh: &MeshStructure, face_id: usize) -> Option<&QuadFace> {
    mesh.face_lookup.get(&face_id)
}

/// Read the `face_id`-th index quadruple from the flattened sequence.
pub fn flattened_face(mesh: &MeshStructure, face_id: usize) -> Option<[u32; 4]> {
    let start = face_id.checked_mul(4)?;
    let slice = mesh.quad_faces.get(start..start + 4)?;
    Some([slice[0], slice[1], slice[2], slice[3]])
}

/// Check that the flattened face sequence and the lookup map agree in
/// count and per-face content.
///
/// A failure here indicates an implementation bug in the construction
/// path, not bad user input; callers should treat it as fatal.
pub fn verify_face_lookup(mesh: &MeshStructure) -> GenResult<()> {
    let faces = mesh.quad_faces.len() / 4;
    let lookup = mesh.face_lookup.len();
    if mesh.quad_faces.len() % 4 != 0 || faces != lookup {
        return Err(GenError::InconsistentFaceCount { faces, lookup });
    }
    for face_id in 0..faces {
        let flat = flattened_face(mesh, face_id)
            .ok_or(GenError::InconsistentFaceCount { faces, lookup })?;
        match mesh.face_lookup.get(&face_id) {
            Some(entry) if entry.indices == flat => {}
            _ => return Err(GenError::InconsistentFaceCount { faces, lookup }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::mesh_data::uv;

    const QUAD_UVS: [Uv; 4] = [uv(0.0, 0.0), uv(1.0, 0.0), uv(1.0, 1.0), uv(0.0, 1.0)];

    fn unit_quad() -> MeshStructure {
        let mut mesh = MeshStructure::default();
        add_vertex_position(&mut mesh, Point3::new(0.0, 0.0, 0.0));
        add_vertex_position(&mut mesh, Point3::new(1.0, 0.0, 0.0));
        add_vertex_position(&mut mesh, Point3::new(1.0, 1.0, 0.0));
        add_vertex_position(&mut mesh, Point3::new(0.0, 1.0, 0.0));
        mesh
    }

    #[test]
    fn test_vertex_index_assignment() {
        let mut mesh = MeshStructure::default();
        assert_eq!(add_vertex_position(&mut mesh, Point3::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(add_vertex_position(&mut mesh, Point3::new(1.0, 2.0, 3.0)), 1);
        // duplicates are kept, not merged
        assert_eq!(vertex_count(&mesh), 2);
    }

    #[test]
    fn test_add_quad_face_updates_both_paths() {
        let mut mesh = unit_quad();
        let face_id = add_quad_face(&mut mesh, [0, 1, 2, 3], QUAD_UVS)
            .expect("valid face should append");
        assert_eq!(face_id, 0);
        assert_eq!(face_count(&mesh), 1);
        assert_eq!(flattened_face(&mesh, 0), Some([0, 1, 2, 3]));
        assert_eq!(face(&mesh, 0).expect("lookup entry").indices, [0, 1, 2, 3]);
        verify_face_lookup(&mesh).expect("both paths agree");
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut mesh = unit_quad();
        let err = add_quad_face(&mut mesh, [0, 1, 2, 4], QUAD_UVS)
            .expect_err("index 4 is out of range");
        assert_eq!(
            err,
            GenError::InvalidIndex {
                index: 4,
                vertex_count: 4
            }
        );
        // face count unchanged, no partial insert
        assert_eq!(face_count(&mesh), 0);
        assert!(mesh.quad_faces.is_empty());
        assert!(mesh.face_lookup.is_empty());
    }

    #[test]
    fn test_empty_mesh_rejects_any_face() {
        let mut mesh = MeshStructure::default();
        let err = add_quad_face(&mut mesh, [0, 1, 2, 3], QUAD_UVS)
            .expect_err("no vertices yet");
        assert_eq!(
            err,
            GenError::InvalidIndex {
                index: 0,
                vertex_count: 0
            }
        );
    }

    #[test]
    fn test_repeated_index_rejected() {
        let mut mesh = unit_quad();
        let err = add_quad_face(&mut mesh, [0, 1, 1, 2], QUAD_UVS)
            .expect_err("corner indices must be distinct");
        assert_eq!(err, GenError::DegenerateFace { indices: [0, 1, 1, 2] });
        assert_eq!(face_count(&mesh), 0);
    }

    #[test]
    fn test_round_trip_both_access_paths() {
        let mut mesh = unit_quad();
        add_vertex_position(&mut mesh, Point3::new(2.0, 0.0, 0.0));
        add_vertex_position(&mut mesh, Point3::new(2.0, 1.0, 0.0));
        add_quad_face(&mut mesh, [0, 1, 2, 3], QUAD_UVS).expect("first face");
        add_quad_face(&mut mesh, [1, 4, 5, 2], QUAD_UVS).expect("second face");

        for face_id in 0..face_count(&mesh) {
            let flat = flattened_face(&mesh, face_id).expect("flattened quadruple");
            let entry = face(&mesh, face_id).expect("lookup entry");
            assert_eq!(flat, entry.indices);
        }
        verify_face_lookup(&mesh).expect("consistent after two appends");
    }

    #[test]
    fn test_verify_detects_divergence() {
        let mut mesh = unit_quad();
        add_quad_face(&mut mesh, [0, 1, 2, 3], QUAD_UVS).expect("face");
        // simulate a construction bug by dropping the lookup entry
        mesh.face_lookup.remove(&0);
        let err = verify_face_lookup(&mesh).expect_err("lengths diverged");
        assert_eq!(err, GenError::InconsistentFaceCount { faces: 1, lookup: 0 });
    }
}
