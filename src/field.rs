//! The particle field simulator.
//!
//! [`ParticleField`] owns the configuration, the particle store, the pointer
//! tracker, the target resolver and the frame clock. Each frame is one
//! synchronous pass over all particles: resolve the focal point, ease every
//! particle toward its per-frame target, and emit a transform per particle.
//! There is no parallelism and no locking; pointer and resize updates mutate
//! state that the next frame's pass reads.

use std::time::Duration;

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::FieldConfig;
use crate::error::{ConfigError, GpuError};
use crate::input::{PointerTracker, IDLE_AFTER_SECS};
use crate::particle::{Particle, ParticleTransform};
use crate::sink::RenderSink;
use crate::target::{TargetResolver, CAMERA_Z};
use crate::time::FrameClock;

/// Ring-distance falloff: particles this far from the ring shrink to zero.
const SCALE_FALLOFF: f32 = 10.0;

/// An interactive magnetic-ring particle field.
///
/// ```ignore
/// use ringfield::prelude::*;
///
/// let mut field = ParticleField::new(FieldConfig {
///     count: 400,
///     auto_animate: true,
///     ..Default::default()
/// })?;
/// field.start();
/// // per frame: field.tick(&mut sink)?;
/// ```
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    tracker: PointerTracker,
    resolver: TargetResolver,
    clock: FrameClock,
    transforms: Vec<ParticleTransform>,
    viewport: (u32, u32),
    running: bool,
    disposed: bool,
}

impl ParticleField {
    /// Build a field with entropy-seeded particle placement.
    ///
    /// Fails synchronously on an invalid configuration; a failed field is
    /// never started.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        let mut rng = SmallRng::from_entropy();
        Self::from_rng(config, &mut rng)
    }

    /// Build a field whose particle placement is reproducible from `seed`.
    ///
    /// Two fields with equal configs and seeds, fed equal step durations and
    /// pointer positions, emit bit-identical transforms.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::from_rng(config, &mut rng)
    }

    fn from_rng(config: FieldConfig, rng: &mut SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let particles = (0..config.count).map(|_| Particle::spawn(rng)).collect();
        let transforms = Vec::with_capacity(config.count);
        let mut tracker = PointerTracker::new();
        tracker.set_window_size(1280, 720);
        Ok(Self {
            config,
            particles,
            tracker,
            resolver: TargetResolver::new(),
            clock: FrameClock::new(),
            transforms,
            viewport: (1280, 720),
            running: false,
            disposed: false,
        })
    }

    /// Begin simulating. Idempotent; a disposed field stays stopped.
    pub fn start(&mut self) {
        if !self.disposed {
            self.running = true;
        }
    }

    /// Stop the field for good.
    ///
    /// Safe to call repeatedly. Afterwards [`step`](Self::step) and
    /// [`update`](Self::update) are no-ops and particle state never mutates
    /// again; the frame loop driving the field observes
    /// [`is_disposed`](Self::is_disposed) and stops scheduling frames.
    pub fn dispose(&mut self) {
        self.running = false;
        self.disposed = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Particle records, for inspection.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Transforms from the most recent frame.
    pub fn transforms(&self) -> &[ParticleTransform] {
        &self.transforms
    }

    /// The smoothed focal point, world units.
    pub fn focal_point(&self) -> Vec2 {
        self.resolver.virtual_target()
    }

    /// Feed a pointer position in window pixels (origin top-left, y down).
    pub fn pointer_moved_px(&mut self, x: f32, y: f32) {
        let now = self.clock.elapsed();
        self.tracker.pointer_moved_px(x, y, now);
    }

    /// Feed a pointer position directly in NDC ([-1, 1], y up).
    pub fn set_pointer(&mut self, ndc: Vec2) {
        let now = self.clock.elapsed();
        self.tracker.set_ndc(ndc, now);
    }

    /// Record the viewport size for aspect and pointer normalization.
    ///
    /// Zero sizes (container not laid out yet) are ignored; the next real
    /// resize retries.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.tracker.set_window_size(width, height);
    }

    fn aspect(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    /// Advance one frame by an explicit duration. Deterministic; tests feed
    /// synthetic timestamps through this.
    pub fn step(&mut self, dt: Duration) -> &[ParticleTransform] {
        if !self.running {
            return &self.transforms;
        }
        let (elapsed, _) = self.clock.advance(dt);
        self.integrate(elapsed);
        &self.transforms
    }

    /// Advance one frame by wall time since the previous update.
    pub fn update(&mut self) -> &[ParticleTransform] {
        if !self.running {
            return &self.transforms;
        }
        let (elapsed, _) = self.clock.update();
        self.integrate(elapsed);
        &self.transforms
    }

    /// One full frame against a render sink: measure its viewport, advance
    /// the simulation by wall time, present the transforms.
    pub fn tick<S: RenderSink>(&mut self, sink: &mut S) -> Result<(), GpuError> {
        let (w, h) = sink.viewport();
        self.set_viewport(w, h);
        self.update();
        sink.present(&self.transforms)
    }

    /// The per-particle stepper. One synchronous pass; no suspension.
    fn integrate(&mut self, elapsed: f32) {
        let extent = crate::target::world_extent(self.aspect());
        let idle = self.config.auto_animate && self.tracker.idle_for(elapsed) >= IDLE_AFTER_SECS;
        let focal = self
            .resolver
            .resolve(self.tracker.ndc(), elapsed, idle, extent);

        let global_rotation = elapsed * self.config.rotation_speed;
        let magnet_radius = self.config.magnet_radius_clamped();
        let jitter_spread = self.config.jitter_spread();
        let depth = self.config.depth_factor;

        self.transforms.clear();
        for p in &mut self.particles {
            p.phase += p.drift_speed * 0.5;

            // Particles farther back see a foreshortened focal point.
            let projection = 1.0 - p.home.z / CAMERA_Z;
            let focal_p = focal * projection;

            let dx = p.home.x - focal_p.x;
            let dy = p.home.y - focal_p.y;
            let dist = (dx * dx + dy * dy).sqrt();

            let mut target = Vec3::new(p.home.x, p.home.y, p.home.z * depth);
            if dist < magnet_radius {
                // Captured: park on the ring at the home-anchor angle, offset
                // by the global rotation. atan2(0, 0) is 0, not an error.
                let angle = dy.atan2(dx) + global_rotation;
                let wave = (p.phase * self.config.wave_speed + angle).sin()
                    * 0.5
                    * self.config.wave_amplitude;
                let jitter = p.radius_jitter * jitter_spread;
                let ring = self.config.ring_radius + wave + jitter;
                target.x = focal_p.x + ring * angle.cos();
                target.y = focal_p.y + ring * angle.sin();
                target.z = p.home.z * depth + p.phase.sin() * self.config.wave_amplitude * depth;
            }

            p.current += (target - p.current) * self.config.lerp_speed;

            // Face the depth-adjusted focal point at the particle's own z.
            let forward = Vec3::new(focal_p.x, focal_p.y, p.current.z) - p.current;

            let planar = Vec2::new(p.current.x - focal_p.x, p.current.y - focal_p.y).length();
            let ring_error = (planar - self.config.ring_radius).abs();
            let base_scale = (1.0 - ring_error / SCALE_FALLOFF).clamp(0.0, 1.0);
            let pulse = 0.8
                + (p.phase * self.config.pulse_speed).sin() * 0.2 * self.config.particle_variance;
            let scale = base_scale * pulse * self.config.particle_size;

            self.transforms.push(ParticleTransform {
                position: p.current,
                forward,
                up: Vec3::Y,
                scale,
            });
        }
    }
}
