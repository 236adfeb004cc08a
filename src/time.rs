//! Frame clock for the simulation loop.
//!
//! One clock drives the whole field. The real-time constructor measures wall
//! time between [`FrameClock::update`] calls; the manual constructor only
//! moves when fed explicit durations through [`FrameClock::advance`], which
//! makes whole-field tests deterministic and non-realtime.

use std::time::{Duration, Instant};

/// Elapsed/delta/frame tracking with an optional synthetic mode.
#[derive(Debug)]
pub struct FrameClock {
    /// Wall-clock anchor for real-time mode; `None` means manual.
    last_instant: Option<Instant>,
    elapsed_secs: f32,
    delta_secs: f32,
    frames: u64,
    paused: bool,
}

impl FrameClock {
    /// A clock driven by wall time.
    pub fn new() -> Self {
        Self {
            last_instant: Some(Instant::now()),
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frames: 0,
            paused: false,
        }
    }

    /// A clock that only moves via [`advance`](Self::advance).
    pub fn manual() -> Self {
        Self {
            last_instant: None,
            ..Self::new()
        }
    }

    /// Advance by wall time since the previous update. Call once per frame.
    ///
    /// On a manual clock this is a no-op and returns the current state with a
    /// zero delta.
    pub fn update(&mut self) -> (f32, f32) {
        match self.last_instant {
            Some(prev) => {
                let now = Instant::now();
                self.last_instant = Some(now);
                self.advance(now.duration_since(prev))
            }
            None => (self.elapsed_secs, 0.0),
        }
    }

    /// Advance by an explicit duration.
    ///
    /// Returns `(elapsed, delta)` in seconds. While paused, time does not
    /// move and the delta is zero.
    pub fn advance(&mut self, dt: Duration) -> (f32, f32) {
        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }
        self.delta_secs = dt.as_secs_f32();
        self.elapsed_secs += self.delta_secs;
        self.frames += 1;
        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds covered by the most recent frame.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames advanced since creation.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the clock; elapsed stops and deltas become zero.
    pub fn pause(&mut self) {
        self.paused = true;
        // Drop the wall anchor so resuming doesn't replay the pause gap.
        if self.last_instant.is_some() {
            self.last_instant = Some(Instant::now());
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            if self.last_instant.is_some() {
                self.last_instant = Some(Instant::now());
            }
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let mut clock = FrameClock::manual();
        let (elapsed, delta) = clock.update();
        assert_eq!((elapsed, delta), (0.0, 0.0));
        assert_eq!(clock.frame(), 0);

        let (elapsed, delta) = clock.advance(Duration::from_millis(16));
        assert!((elapsed - 0.016).abs() < 1e-6);
        assert!((delta - 0.016).abs() < 1e-6);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn advance_accumulates_elapsed() {
        let mut clock = FrameClock::manual();
        for _ in 0..100 {
            clock.advance(Duration::from_millis(10));
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-4);
        assert_eq!(clock.frame(), 100);
    }

    #[test]
    fn paused_clock_does_not_move() {
        let mut clock = FrameClock::manual();
        clock.advance(Duration::from_millis(100));
        let before = clock.elapsed();

        clock.pause();
        assert!(clock.is_paused());
        let (elapsed, delta) = clock.advance(Duration::from_secs(5));
        assert_eq!(elapsed, before);
        assert_eq!(delta, 0.0);

        clock.resume();
        clock.advance(Duration::from_millis(100));
        assert!(clock.elapsed() > before);
    }

    #[test]
    fn real_clock_update_advances() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let (elapsed, delta) = clock.update();
        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(clock.frame(), 1);
    }
}
