//! Frame timing
//!
//! Text surfaces are driven by an integer millisecond delta per frame. The
//! [`FrameClock`] turns wall-clock time into that delta for hosts that don't
//! already have one.

use std::time::{Duration, Instant};

/// Per-frame millisecond clock
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    /// Sub-millisecond remainder carried to the next frame
    carry: Duration,
    total_ms: u64,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock whose first frame is measured from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            carry: Duration::ZERO,
            total_ms: 0,
            frame_count: 0,
        }
    }

    /// Advance to the current instant and return the elapsed milliseconds
    pub fn tick(&mut self) -> u32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now` and return the whole milliseconds since the last tick
    ///
    /// An instant earlier than the previous tick yields zero.
    pub fn tick_at(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_frame) + self.carry;
        let whole_ms = elapsed.as_millis();
        let elapsed_ms = u32::try_from(whole_ms).unwrap_or(u32::MAX);

        self.carry = elapsed.saturating_sub(Duration::from_millis(u64::from(elapsed_ms)));
        self.last_frame = self.last_frame.max(now);
        self.total_ms = self.total_ms.saturating_add(u64::from(elapsed_ms));
        self.frame_count += 1;

        elapsed_ms
    }

    /// Total milliseconds handed out so far
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average frames per second since the clock started
    pub fn average_fps(&self) -> f32 {
        if self.total_ms > 0 {
            self.frame_count as f32 * 1000.0 / self.total_ms as f32
        } else {
            0.0
        }
    }
}
