//! Indexed quad-mesh representation and demo-mesh builders
//!
//! The mesh is plain data: a position sequence, a flattened face index
//! sequence and a face-id lookup map kept in lockstep. All
//! transformations live in `mesh_operations` as pure functions; the
//! builders populate a fresh mesh and hand it off to the scene
//! transform boundary, which reads it once.

// Data structures
pub mod mesh_data;
// Pure functions
pub mod mesh_operations;
// Demo-shape construction
pub mod builder;

// Re-export data structures
pub use mesh_data::{uv, MeshStructure, QuadFace, Uv};
// Re-export operations
pub use mesh_operations::{
    add_quad_face, add_vertex_position, face, face_count, flattened_face, vertex_count,
    verify_face_lookup,
};
pub use builder::{build_demo_cube, build_gen_mesh};
