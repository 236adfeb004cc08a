//! A dense, fast field: tight ring, strong capture, visible rotation.
//!
//! Run with: `cargo run --example storm`

use ringfield::prelude::*;

fn main() -> Result<(), FieldError> {
    ringfield::run(FieldConfig {
        count: 800,
        ring_radius: 8.0,
        magnet_radius: 25.0,
        wave_speed: 1.2,
        lerp_speed: 0.2,
        rotation_speed: 0.6,
        pulse_speed: 5.0,
        field_strength: 40.0,
        particle_size: 0.7,
        color: Vec3::new(1.0, 0.45, 0.25),
        auto_animate: true,
        ..Default::default()
    })
}
