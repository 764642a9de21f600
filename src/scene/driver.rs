//! Batch instancing driver
//!
//! Builds the demo mesh once, computes one placement per requested
//! instance (ring spread or mirror-and-climb walk) and attaches each
//! through the scene sink. Index k of the spreader output maps 1:1 to
//! the k-th attached instance.

use cgmath::EuclideanSpace;

use crate::error::GenResult;
use crate::mesh::{build_demo_cube, verify_face_lookup};
use crate::placement::PlacementState;
use crate::spreader::{position_radial_spreader, ScaleInput};
use crate::{GeneratorConfig, InstanceLayout};

use super::sink::SceneSink;

/// Generate `config.instance_count` demo-cube instances into the sink.
///
/// The scale function is consulted once per instance for ring layouts;
/// the climb walk places unscaled instances. Returns the number of
/// instances attached.
pub fn generate_instances<F>(
    config: &GeneratorConfig,
    sink: &mut dyn SceneSink,
    mut scale_fn: F,
) -> GenResult<usize>
where
    F: FnMut(&ScaleInput) -> f32,
{
    let mesh = build_demo_cube();
    verify_face_lookup(&mesh)?;

    match config.layout {
        InstanceLayout::Ring => {
            let mut input = config.spreader;
            input.count = config.instance_count;
            let points = position_radial_spreader(input, &mut scale_fn);
            for (k, point) in points.iter().enumerate() {
                let name = format!("GenMesh_{}", k + 1);
                sink.attach_instance(&name, &mesh, point.position.to_vec(), point.scale)?;
            }
        }
        InstanceLayout::Climb => {
            let mut placement = PlacementState::new();
            for _ in 0..config.instance_count {
                let slot = placement.advance();
                sink.attach_instance(&slot.name, &mesh, slot.translation, 1.0)?;
            }
        }
    }

    log::info!(
        "[generate_instances] attached {} instances ({:?} layout)",
        config.instance_count,
        config.layout
    );
    Ok(config.instance_count as usize)
}
