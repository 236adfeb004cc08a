//! Focal-point resolution.
//!
//! Each frame the resolver turns the raw input (pointer NDC, or the
//! autonomous orbit when idle) into a world-space focal point, then eases a
//! smoothed `virtual_target` toward it. The smoothing is unconditional, so
//! switching between pointer and autonomous control never teleports the ring.

use glam::Vec2;

/// Vertical field of view of the presentation camera, degrees.
pub const CAMERA_FOV_DEG: f32 = 35.0;

/// Distance of the presentation camera from the particle plane.
pub const CAMERA_Z: f32 = 50.0;

/// Per-frame easing factor of the virtual target toward the raw focal point.
pub const TARGET_SMOOTHING: f32 = 0.05;

/// World-space extent `(width, height)` visible at the particle plane for a
/// given viewport aspect ratio.
pub fn world_extent(aspect: f32) -> Vec2 {
    let height = 2.0 * (CAMERA_FOV_DEG.to_radians() / 2.0).tan() * CAMERA_Z;
    Vec2::new(height * aspect, height)
}

/// Position of the autonomous orbit at `elapsed` seconds, scaled to a quarter
/// of the world extent: `x = sin(t/2)`, `y = cos(t)`.
pub fn autonomous_orbit(elapsed: f32, extent: Vec2) -> Vec2 {
    Vec2::new(
        (elapsed * 0.5).sin() * (extent.x / 4.0),
        (elapsed * 1.0).cos() * (extent.y / 4.0),
    )
}

/// Computes and smooths the focal point.
#[derive(Debug, Default)]
pub struct TargetResolver {
    virtual_target: Vec2,
}

impl TargetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current smoothed focal point.
    pub fn virtual_target(&self) -> Vec2 {
        self.virtual_target
    }

    /// Advance one frame and return the smoothed focal point in world units.
    ///
    /// `idle` selects the autonomous orbit over the projected pointer; the
    /// caller decides idleness (auto-animate flag plus the tracker's clock).
    pub fn resolve(&mut self, pointer_ndc: Vec2, elapsed: f32, idle: bool, extent: Vec2) -> Vec2 {
        let raw = if idle {
            autonomous_orbit(elapsed, extent)
        } else {
            // NDC is [-1, 1] on both axes; half the extent maps it to world.
            pointer_ndc * extent * 0.5
        };
        self.virtual_target += (raw - self.virtual_target) * TARGET_SMOOTHING;
        self.virtual_target
    }
}
