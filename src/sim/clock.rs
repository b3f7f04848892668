//! Wall-clock to simulation delta conversion
//!
//! The presentation layer feeds frame timestamps in; the clock hands back
//! the elapsed milliseconds since the previous tick. The first tick after a
//! start, resume or reset only establishes a baseline, so a scene that sat in
//! a background tab never receives one giant catch-up delta.

use serde::{Deserialize, Serialize};

/// Timing baseline plus pause flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Timestamp of the previous tick (ms), `None` until a baseline exists
    last_ms: Option<f64>,
    paused: bool,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp and return the delta since the last one.
    ///
    /// Returns `None` while paused and on the first tick after a (re)start.
    /// Timestamps that run backwards yield a zero delta.
    pub fn tick(&mut self, timestamp_ms: f64) -> Option<f64> {
        if self.paused {
            return None;
        }
        let prev = self.last_ms.replace(timestamp_ms)?;
        Some((timestamp_ms - prev).max(0.0))
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.last_ms = None;
    }

    /// Resume ticking; the next tick becomes a fresh baseline
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_ms = None;
    }

    /// Drop the baseline without changing the pause state
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True once a baseline timestamp has been recorded
    pub fn has_baseline(&self) -> bool {
        self.last_ms.is_some()
    }
}
