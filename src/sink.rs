//! The seam between simulation and presentation.
//!
//! The field never draws anything itself; it measures the sink's viewport,
//! steps the simulation, and hands the sink one transform per particle. The
//! bundled wgpu sink lives in [`gpu`](crate::gpu); tests use trivial in-memory
//! sinks.

use crate::error::GpuError;
use crate::particle::ParticleTransform;

/// A consumer of per-particle transforms.
pub trait RenderSink {
    /// Current viewport size in device-independent pixels.
    ///
    /// A `(0, 0)` answer means "not laid out yet"; the field skips the aspect
    /// recalculation and keeps its previous viewport.
    fn viewport(&self) -> (u32, u32);

    /// Draw one frame from the given transforms.
    ///
    /// Errors propagate to the frame loop and halt it; the field never
    /// retries a failed present.
    fn present(&mut self, transforms: &[ParticleTransform]) -> Result<(), GpuError>;
}
