//! Pointer tracking and idle detection.
//!
//! The tracker keeps the latest pointer position in normalized device
//! coordinates and the timestamp of the last movement that exceeded a small
//! deadband. Sub-pixel jitter therefore never resets the idle clock, which is
//! what arms the autonomous orbit in [`TargetResolver`](crate::target::TargetResolver).

use glam::Vec2;

/// Minimum normalized movement that counts as pointer activity.
pub const POINTER_DEADBAND: f32 = 1e-3;

/// Seconds of pointer silence before the field is considered idle.
pub const IDLE_AFTER_SECS: f32 = 2.0;

/// Latest pointer state plus the idle-detection clock.
#[derive(Debug)]
pub struct PointerTracker {
    /// Latest pointer position in NDC, y up.
    ndc: Vec2,
    /// Last position that exceeded the deadband.
    settled: Vec2,
    /// Elapsed-seconds timestamp of the last real movement.
    last_move_at: f32,
    /// Window size in device-independent pixels, for NDC conversion.
    window_size: (u32, u32),
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            ndc: Vec2::ZERO,
            settled: Vec2::ZERO,
            last_move_at: 0.0,
            window_size: (0, 0),
        }
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest pointer position in NDC.
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Seconds since the last movement that exceeded the deadband.
    pub fn idle_for(&self, now_secs: f32) -> f32 {
        (now_secs - self.last_move_at).max(0.0)
    }

    /// Whether the pointer has been idle long enough to hand control to the
    /// autonomous orbit.
    pub fn is_idle(&self, now_secs: f32) -> bool {
        self.idle_for(now_secs) >= IDLE_AFTER_SECS
    }

    /// Record the window size used for pixel-to-NDC conversion.
    ///
    /// A zero-sized window (not yet laid out) is ignored; the next real
    /// resize retries.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.window_size = (width, height);
    }

    /// Feed a pointer position in window pixels (y down, origin top-left).
    pub fn pointer_moved_px(&mut self, x: f32, y: f32, now_secs: f32) {
        let (w, h) = self.window_size;
        if w == 0 || h == 0 {
            return;
        }
        let ndc = Vec2::new(
            (x / w as f32) * 2.0 - 1.0,
            1.0 - (y / h as f32) * 2.0, // y flipped
        );
        self.set_ndc(ndc, now_secs);
    }

    /// Feed a pointer position directly in NDC.
    ///
    /// The position is always stored, but the idle clock only resets when the
    /// movement from the last settled position exceeds the deadband.
    pub fn set_ndc(&mut self, ndc: Vec2, now_secs: f32) {
        self.ndc = ndc;
        if ndc.distance(self.settled) > POINTER_DEADBAND {
            self.settled = ndc;
            self.last_move_at = now_secs;
        }
    }
}
