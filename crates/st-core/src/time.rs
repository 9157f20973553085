//! Frame time model.
//!
//! The host drives the core with a variable `dt` per logic frame.  `FrameClock`
//! accumulates those deltas into an elapsed-seconds value (the equivalent of a
//! game engine's "time since scene start") and counts frames for logging.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// A monotonically increasing logic-frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Frame(pub u64);

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Elapsed scene time plus the current frame number.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// Seconds since the clock was created.
    pub elapsed: f32,
    /// The current frame, advanced by [`FrameClock::advance`].
    pub frame: Frame,
    /// The delta passed to the most recent `advance`.
    pub last_dt: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `dt` seconds.  Negative deltas are treated as 0.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.last_dt = dt;
        self.frame = Frame(self.frame.0 + 1);
    }

    /// Seconds elapsed since `timestamp` (a previous `elapsed` reading).
    #[inline]
    pub fn since(&self, timestamp: f32) -> f32 {
        self.elapsed - timestamp
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.frame, self.elapsed)
    }
}
