//! Quadgen - procedural quad-mesh demo generator
//!
//! Builds simple indexed quad meshes (a demo cube and a parameterized
//! quad grid) and computes placements for batches of generated
//! instances. Data structures are plain data; transformations are pure
//! functions in the matching `*_operations` modules. The external
//! scene-interchange layer is reached only through the `SceneSink`
//! boundary - this crate holds no vendor SDK resources and is
//! oblivious to their lifetime.

// Core modules
pub mod error;
pub mod mesh;
pub mod placement;
pub mod scene;
pub mod spreader;

pub use error::{GenError, GenResult};
pub use mesh::{
    add_quad_face, add_vertex_position, build_demo_cube, build_gen_mesh, uv, MeshStructure,
    QuadFace, Uv,
};
pub use placement::{PlacementSlot, PlacementState, RotationAxis};
pub use scene::{generate_instances, CollectedScene, SceneInstance, SceneSink};
pub use spreader::{
    position_radial_spreader, ScaleInput, SpreadAxis, SpreadDirection, SpreadPoint, SpreaderInput,
};

use anyhow::Result;

/// Upper bound on batch size; anything larger is a configuration
/// mistake, not a real scene.
pub const MAX_INSTANCES: u32 = 4096;

/// How generated instances are laid out in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceLayout {
    /// Radial ring via the positional spreader.
    Ring,
    /// The sequential mirror-and-climb placement walk.
    Climb,
}

/// Main generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub instance_count: u32,
    pub layout: InstanceLayout,
    /// Ring parameters used by the `Ring` layout; `count` is
    /// overridden by `instance_count` at generation time.
    pub spreader: SpreaderInput,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            instance_count: 6,
            layout: InstanceLayout::Climb,
            spreader: SpreaderInput::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validate configuration parameters
    ///
    /// The spreader itself accepts any finite or non-finite values;
    /// the batch driver is stricter and rejects configs that cannot
    /// describe a real scene.
    pub fn validate(&self) -> Result<()> {
        if self.instance_count == 0 {
            return Err(anyhow::anyhow!(
                "GeneratorConfig: instance_count cannot be 0"
            ));
        }
        if self.instance_count > MAX_INSTANCES {
            return Err(anyhow::anyhow!(
                "GeneratorConfig: instance_count {} exceeds maximum of {}",
                self.instance_count,
                MAX_INSTANCES
            ));
        }
        if !self.spreader.radius.is_finite() {
            return Err(anyhow::anyhow!(
                "GeneratorConfig: spreader radius must be finite, got {}",
                self.spreader.radius
            ));
        }
        if !self.spreader.step_multiplier.is_finite() {
            return Err(anyhow::anyhow!(
                "GeneratorConfig: spreader step_multiplier must be finite, got {}",
                self.spreader.step_multiplier
            ));
        }

        log::info!(
            "[GeneratorConfig] validated: {} instances, {:?} layout",
            self.instance_count,
            self.layout
        );
        Ok(())
    }
}
