//! Field configuration.
//!
//! All tunable behavior lives in [`FieldConfig`]. A config is validated once
//! at construction and never changes afterwards; use struct-update syntax to
//! override only the parameters you care about:
//!
//! ```ignore
//! let config = FieldConfig {
//!     count: 500,
//!     auto_animate: true,
//!     ..Default::default()
//! };
//! ```

use crate::error::ConfigError;
use glam::Vec3;

/// Tunable parameters for a [`ParticleField`](crate::ParticleField).
///
/// Immutable after construction. Every numeric field must be finite and
/// `lerp_speed` must lie in (0, 1]; see [`FieldConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of particles in the field.
    pub count: usize,
    /// Distance at which a particle's home anchor is captured into the ring.
    /// Negative values behave as zero (nothing is ever captured).
    pub magnet_radius: f32,
    /// Base radius of the ring formation around the focal point.
    pub ring_radius: f32,
    /// Angular frequency of the per-particle radius wave.
    pub wave_speed: f32,
    /// Amplitude of the radius wave and of the captured z oscillation.
    pub wave_amplitude: f32,
    /// Base particle size; final scale is modulated per frame.
    pub particle_size: f32,
    /// Fraction-per-frame convergence rate toward the target position.
    /// Must be in (0, 1]; 1.0 makes convergence instantaneous.
    pub lerp_speed: f32,
    /// Accent color, RGB in 0..1.
    pub color: Vec3,
    /// Follow an autonomous orbit when the pointer has been idle for 2 s.
    /// The idle clock starts at construction, so a field that never sees a
    /// pointer begins orbiting 2 s of simulated time in.
    pub auto_animate: bool,
    /// Strength of the per-particle pulse modulation.
    pub particle_variance: f32,
    /// Global rotation of the ring, radians per second of elapsed time.
    pub rotation_speed: f32,
    /// Scale applied to particle depth (z) coordinates.
    pub depth_factor: f32,
    /// Angular frequency of the breathing pulse.
    pub pulse_speed: f32,
    /// Controls ring-radius jitter spread: higher strength, tighter ring.
    /// Negative values behave as zero.
    pub field_strength: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 300,
            magnet_radius: 10.0,
            ring_radius: 10.0,
            wave_speed: 0.4,
            wave_amplitude: 1.0,
            particle_size: 1.0,
            lerp_speed: 0.1,
            color: Vec3::new(1.0, 0.624, 0.988),
            auto_animate: false,
            particle_variance: 1.0,
            rotation_speed: 0.0,
            depth_factor: 1.0,
            pulse_speed: 3.0,
            field_strength: 10.0,
        }
    }
}

impl FieldConfig {
    /// Check that every numeric parameter is usable.
    ///
    /// Rejects NaN/infinite values and a `lerp_speed` outside (0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("magnet_radius", self.magnet_radius),
            ("ring_radius", self.ring_radius),
            ("wave_speed", self.wave_speed),
            ("wave_amplitude", self.wave_amplitude),
            ("particle_size", self.particle_size),
            ("lerp_speed", self.lerp_speed),
            ("particle_variance", self.particle_variance),
            ("rotation_speed", self.rotation_speed),
            ("depth_factor", self.depth_factor),
            ("pulse_speed", self.pulse_speed),
            ("field_strength", self.field_strength),
        ];
        for (field, value) in named {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if !self.color.is_finite() {
            return Err(ConfigError::NonFinite { field: "color" });
        }
        if !(self.lerp_speed > 0.0 && self.lerp_speed <= 1.0) {
            return Err(ConfigError::LerpSpeedOutOfRange(self.lerp_speed));
        }
        Ok(())
    }

    /// Magnet radius with negative values clamped away.
    pub(crate) fn magnet_radius_clamped(&self) -> f32 {
        self.magnet_radius.max(0.0)
    }

    /// Ring-radius jitter spread, `5 / (field_strength + 0.1)`.
    ///
    /// Field strength is floored at zero so the denominator never approaches
    /// zero from below.
    pub(crate) fn jitter_spread(&self) -> f32 {
        5.0 / (self.field_strength.max(0.0) + 0.1)
    }
}
