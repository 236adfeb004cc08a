//! # Ringfield - Interactive Magnetic-Ring Particle Fields
//!
//! CPU particle simulation with a simple, declarative API.
//!
//! A field holds a few hundred particles drifting in a shallow 3D slab. A
//! focal point, driven by the pointer or by an autonomous orbit when the
//! pointer goes quiet, magnetically captures nearby particles and arranges
//! them into a slowly rotating, wave-modulated ring. Everything converges by
//! exponential smoothing, so pointer motion, idleness, and parameter choices
//! all read as fluid motion rather than snaps.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ringfield::prelude::*;
//!
//! fn main() -> Result<(), FieldError> {
//!     ringfield::run(FieldConfig {
//!         count: 400,
//!         ring_radius: 12.0,
//!         auto_animate: true,
//!         ..Default::default()
//!     })
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] is the simulator: configuration, particle store, pointer
//! tracking, focal-point smoothing and the per-frame stepper. It knows nothing
//! about windows or GPUs. Drive it manually with
//! [`step`](ParticleField::step) (explicit durations, deterministic) or
//! [`update`](ParticleField::update) (wall time), and read back one
//! [`ParticleTransform`] per particle.
//!
//! ### Render sinks
//!
//! [`RenderSink`] is the seam to presentation. [`tick`](ParticleField::tick)
//! measures the sink's viewport, advances one frame, and presents the
//! transforms. The bundled wgpu sink draws each particle as a soft-edged
//! billboard quad; tests substitute in-memory sinks.
//!
//! ### The window mount
//!
//! [`run`] is the batteries-included path: it builds the field, opens a winit
//! window, brings up the wgpu sink and drives frames until the window closes.
//!
//! ### Reproducibility
//!
//! [`ParticleField::with_seed`] makes particle placement a pure function of
//! the seed. Equal configs, seeds, step durations and pointer feeds produce
//! bit-identical transforms.

pub mod config;
pub mod error;
pub mod field;
mod gpu;
pub mod input;
pub mod particle;
pub mod sink;
pub mod target;
pub mod time;
mod window;

pub use bytemuck;
pub use config::FieldConfig;
pub use error::{ConfigError, FieldError, GpuError};
pub use field::ParticleField;
pub use glam::{Vec2, Vec3};
pub use gpu::SHADER_SOURCE;
pub use particle::{Particle, ParticleTransform};
pub use sink::RenderSink;
pub use time::FrameClock;
pub use window::run;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use ringfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::error::{ConfigError, FieldError, GpuError};
    pub use crate::field::ParticleField;
    pub use crate::particle::{Particle, ParticleTransform};
    pub use crate::sink::RenderSink;
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec3};
}
