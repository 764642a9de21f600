//! Pure functions for radial position spreading

use std::f32::consts::TAU;

use cgmath::{Angle, Point3, Rad};

use super::spreader_data::{ScaleInput, SpreadAxis, SpreadDirection, SpreadPoint, SpreaderInput};

/// Compute `input.count` positions arranged radially around the spread
/// axis, invoking the caller's scale function once per position in
/// order.
///
/// angle(k) = start_offset + sign(direction) * k * step, with
/// step = 2*pi/count * step_multiplier, so a multiplier of 1
/// reproduces exactly one full revolution. The cosine lands on the
/// first free axis, the sine on the second; the spread axis is held at
/// `axis_value`.
///
/// Deterministic: identical inputs (including the scale function)
/// always yield the identical sequence.
pub fn position_radial_spreader<F>(input: SpreaderInput, mut scale_fn: F) -> Vec<SpreadPoint>
where
    F: FnMut(&ScaleInput) -> f32,
{
    if input.count == 0 {
        return Vec::new();
    }

    let step = TAU / input.count as f32 * input.step_multiplier * input.direction.sign();
    let mut points = Vec::with_capacity(input.count as usize);
    for index in 0..input.count {
        let angle = input.start_offset + Rad(step * index as f32);
        let planar = (input.radius * angle.cos(), input.radius * angle.sin());
        let position = ring_position(input.axis, input.axis_value, planar);
        let scale = scale_fn(&ScaleInput {
            index,
            radius: input.radius,
            angle,
            axis: input.axis,
            direction: input.direction,
        });
        points.push(SpreadPoint { position, scale });
    }

    log::trace!(
        "[position_radial_spreader] {} positions around {:?} at radius {}",
        points.len(),
        input.axis,
        input.radius
    );
    points
}

/// Map planar (cos, sin) coordinates onto the two axes orthogonal to
/// the spread axis.
fn ring_position(axis: SpreadAxis, axis_value: f32, (c, s): (f32, f32)) -> Point3<f32> {
    match axis {
        SpreadAxis::X => Point3::new(axis_value, c, s),
        SpreadAxis::Y => Point3::new(c, axis_value, s),
        SpreadAxis::Z => Point3::new(c, s, axis_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_scale(_: &ScaleInput) -> f32 {
        1.0
    }

    fn ring(count: u32, radius: f32, axis: SpreadAxis, multiplier: f32) -> SpreaderInput {
        SpreaderInput {
            count,
            radius,
            start_offset: Rad(0.0),
            axis,
            axis_value: 0.0,
            step_multiplier: multiplier,
            direction: SpreadDirection::CounterClockwise,
        }
    }

    #[test]
    fn test_output_length_matches_count() {
        for count in [0u32, 1, 2, 7, 100] {
            let points = position_radial_spreader(ring(count, 5.0, SpreadAxis::Y, 1.0), unit_scale);
            assert_eq!(points.len(), count as usize);
        }
    }

    #[test]
    fn test_quarter_ring_around_y() {
        // count=4, radius=10, axis=Y, multiplier=1: angles 0/90/180/270
        // degrees in the X/Z plane, Y held at the configured value
        let points = position_radial_spreader(ring(4, 10.0, SpreadAxis::Y, 1.0), unit_scale);
        let expected = [
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(-10.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, -10.0),
        ];
        for (point, want) in points.iter().zip(expected.iter()) {
            assert!((point.position.x - want.x).abs() < 1e-4);
            assert!((point.position.y - want.y).abs() < 1e-4);
            assert!((point.position.z - want.z).abs() < 1e-4);
        }
    }

    #[test]
    fn test_full_revolution_at_multiplier_one() {
        let count = 12u32;
        let mut calls = Vec::new();
        position_radial_spreader(ring(count, 1.0, SpreadAxis::Z, 1.0), |p| {
            calls.push(p.angle);
            1.0
        });
        let step = TAU / count as f32;
        for (k, angle) in calls.iter().enumerate() {
            assert!((angle.0 - step * k as f32).abs() < 1e-5);
        }
        // consecutive angles differ by exactly 2*pi/count
        for pair in calls.windows(2) {
            assert!((pair[1].0 - pair[0].0 - step).abs() < 1e-5);
        }
    }

    #[test]
    fn test_zero_radius_collapses_to_axis() {
        let mut input = ring(8, 0.0, SpreadAxis::X, 1.0);
        input.axis_value = 42.0;
        let points = position_radial_spreader(input, unit_scale);
        for point in points {
            assert_eq!(point.position, Point3::new(42.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_negative_radius_mirrors_ring() {
        let positive = position_radial_spreader(ring(4, 10.0, SpreadAxis::Y, 1.0), unit_scale);
        let negative = position_radial_spreader(ring(4, -10.0, SpreadAxis::Y, 1.0), unit_scale);
        for (p, n) in positive.iter().zip(negative.iter()) {
            assert!((p.position.x + n.position.x).abs() < 1e-4);
            assert!((p.position.z + n.position.z).abs() < 1e-4);
        }
    }

    #[test]
    fn test_clockwise_reverses_walk() {
        let ccw = position_radial_spreader(ring(4, 10.0, SpreadAxis::Y, 1.0), unit_scale);
        let mut input = ring(4, 10.0, SpreadAxis::Y, 1.0);
        input.direction = SpreadDirection::Clockwise;
        let cw = position_radial_spreader(input, unit_scale);
        // index 1 clockwise lands where index 3 counter-clockwise does
        assert!((cw[1].position.x - ccw[3].position.x).abs() < 1e-4);
        assert!((cw[1].position.z - ccw[3].position.z).abs() < 1e-4);
    }

    #[test]
    fn test_start_offset_rotates_first_position() {
        let mut input = ring(4, 10.0, SpreadAxis::Y, 1.0);
        input.start_offset = Rad(TAU / 4.0);
        let points = position_radial_spreader(input, unit_scale);
        assert!((points[0].position.x).abs() < 1e-4);
        assert!((points[0].position.z - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_function_called_in_order_with_results_recorded() {
        let mut seen = Vec::new();
        let points = position_radial_spreader(ring(5, 3.0, SpreadAxis::Z, 1.0), |p| {
            seen.push(p.index);
            p.index as f32 * 0.5
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        for (k, point) in points.iter().enumerate() {
            assert_eq!(point.scale, k as f32 * 0.5);
        }
    }

    #[test]
    fn test_nan_radius_propagates_without_panic() {
        let points = position_radial_spreader(ring(3, f32::NAN, SpreadAxis::Y, 1.0), unit_scale);
        assert_eq!(points.len(), 3);
        for point in points {
            assert!(point.position.x.is_nan());
        }
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let a = position_radial_spreader(SpreaderInput::default(), unit_scale);
        let b = position_radial_spreader(SpreaderInput::default(), unit_scale);
        assert_eq!(a, b);
    }
}
