//! Print the positions computed by the radial spreader
//!
//! The reference spreader demo: 10 positions at radius 10 around the X
//! axis, two full turns, unit scale.

use quadgen::{position_radial_spreader, SpreaderInput};

fn main() {
    env_logger::init();

    let input = SpreaderInput::default();
    let points = position_radial_spreader(input, |_| 1.0);
    for point in &points {
        println!(
            "[{},{},{}] scale {}",
            point.position.x, point.position.y, point.position.z, point.scale
        );
    }
}
