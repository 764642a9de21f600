//! Scene sink boundary
//!
//! Implementations read each finalized `MeshStructure` once, honoring
//! stored face order, per-corner UVs and winding. The mesh is never
//! mutated after handoff.

use cgmath::Vector3;
use serde::Serialize;

use crate::error::GenResult;
use crate::mesh::MeshStructure;

/// "Attach node" operation of the external scene layer.
pub trait SceneSink {
    fn attach_instance(
        &mut self,
        name: &str,
        mesh: &MeshStructure,
        translation: Vector3<f32>,
        scale: f32,
    ) -> GenResult<()>;
}

/// One attached instance as recorded by [`CollectedScene`].
#[derive(Debug, Clone, Serialize)]
pub struct SceneInstance {
    pub name: String,
    pub translation: Vector3<f32>,
    pub scale: f32,
    pub mesh: MeshStructure,
}

/// In-memory sink preserving attachment order. Stands in for a vendor
/// scene in tests and demos; serializable so collected scenes can be
/// dumped for inspection.
#[derive(Debug, Default, Serialize)]
pub struct CollectedScene {
    pub instances: Vec<SceneInstance>,
}

impl CollectedScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneSink for CollectedScene {
    fn attach_instance(
        &mut self,
        name: &str,
        mesh: &MeshStructure,
        translation: Vector3<f32>,
        scale: f32,
    ) -> GenResult<()> {
        log::debug!(
            "[attach_instance] {} at ({}, {}, {}) scale {}",
            name,
            translation.x,
            translation.y,
            translation.z,
            scale
        );
        self.instances.push(SceneInstance {
            name: name.to_string(),
            translation,
            scale,
            mesh: mesh.clone(),
        });
        Ok(())
    }
}
