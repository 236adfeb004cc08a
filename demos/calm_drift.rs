//! A sparse, slow field: wide soft ring, gentle waves, lazy convergence.
//!
//! Run with: `cargo run --example calm_drift`

use ringfield::prelude::*;

fn main() -> Result<(), FieldError> {
    ringfield::run(FieldConfig {
        count: 180,
        ring_radius: 14.0,
        magnet_radius: 16.0,
        wave_speed: 0.2,
        wave_amplitude: 2.0,
        lerp_speed: 0.04,
        pulse_speed: 1.2,
        field_strength: 3.0,
        color: Vec3::new(0.55, 0.8, 1.0),
        auto_animate: true,
        ..Default::default()
    })
}
