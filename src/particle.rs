//! Particle records and per-frame output transforms.
//!
//! Particles are created once at field construction from a seeded RNG and
//! mutated every frame by the stepper. Their `home` anchor never changes;
//! `current` eases toward a per-frame target; `phase` only ever increases.

use glam::{Mat3, Mat4, Quat, Vec3};
use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::PI;

/// World-space half extents of the box homes are sampled from.
pub const HOME_EXTENT_X: f32 = 100.0;
pub const HOME_EXTENT_Y: f32 = 100.0;
pub const HOME_EXTENT_Z: f32 = 20.0;

/// One particle slot. Lives for the whole lifetime of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Monotonically increasing oscillator phase; drives wave and pulse.
    pub phase: f32,
    /// Static randomized constant, reserved for autonomous drift.
    pub drift_factor: f32,
    /// Static randomized constant; feeds `phase` advancement each frame.
    pub drift_speed: f32,
    /// Fixed anchor point, sampled uniformly inside the home box.
    pub home: Vec3,
    /// Current position; eased toward the frame target.
    pub current: Vec3,
    /// Static random offset in [-1, 1], scaled by the jitter spread.
    pub radius_jitter: f32,
}

impl Particle {
    /// Sample a fresh particle from `rng`.
    pub fn spawn(rng: &mut SmallRng) -> Self {
        let phase = rng.gen::<f32>() * 100.0;
        let drift_factor = 20.0 + rng.gen::<f32>() * 100.0;
        let drift_speed = 0.01 + rng.gen::<f32>() / 200.0;

        let home = Vec3::new(
            (rng.gen::<f32>() - 0.5) * HOME_EXTENT_X,
            (rng.gen::<f32>() - 0.5) * HOME_EXTENT_Y,
            (rng.gen::<f32>() - 0.5) * HOME_EXTENT_Z,
        );

        let radius_jitter = (rng.gen::<f32>() - 0.5) * 2.0;

        Self {
            phase,
            drift_factor,
            drift_speed,
            home,
            current: home,
            radius_jitter,
        }
    }
}

/// Per-particle output handed to the render sink each frame.
///
/// Orientation is an explicit basis rather than an opaque rotation: `forward`
/// points from the particle toward the depth-adjusted focal point and `up` is
/// world up. Any renderer can reconstruct a rotation from the pair; use
/// [`ParticleTransform::rotation`] for the authored-shape correction baked in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleTransform {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub scale: f32,
}

impl ParticleTransform {
    /// Rotation facing `forward` with `up` kept vertical, then flipped half a
    /// turn about the facing axis to correct the base shape's authored
    /// orientation.
    pub fn rotation(&self) -> Quat {
        let z = self.forward.try_normalize().unwrap_or(Vec3::Z);
        let x = self
            .up
            .cross(z)
            .try_normalize()
            .unwrap_or_else(|| z.any_orthonormal_vector());
        let y = z.cross(x);
        let facing = Quat::from_mat3(&Mat3::from_cols(x, y, z));
        Quat::from_axis_angle(z, PI) * facing
    }

    /// Full model matrix: uniform `scale`, [`rotation`](Self::rotation),
    /// translation to `position`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation(),
            self.position,
        )
    }
}
