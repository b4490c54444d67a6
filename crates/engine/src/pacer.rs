//! Tick pacing driven by host-supplied elapsed time.

use crate::types::{DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS, TICK_MS_STEP};

/// Decides when the next simulation tick is due.
///
/// The pacer never reads a clock. Hosts report elapsed milliseconds and get
/// back whether a tick is due; at most one tick fires per call, so a stalled
/// host does not replay a burst of catch-up ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPacer {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_MS)
    }
}

impl TickPacer {
    /// Interval is clamped to `MIN_TICK_MS..=MAX_TICK_MS`.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.clamp(MIN_TICK_MS, MAX_TICK_MS),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Returns the interval actually applied after clamping.
    pub fn set_interval_ms(&mut self, interval_ms: u32) -> u32 {
        self.interval_ms = interval_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self.interval_ms
    }

    /// Shorten the interval by one step.
    pub fn faster(&mut self) -> u32 {
        self.set_interval_ms(self.interval_ms.saturating_sub(TICK_MS_STEP))
    }

    /// Lengthen the interval by one step.
    pub fn slower(&mut self) -> u32 {
        self.set_interval_ms(self.interval_ms.saturating_add(TICK_MS_STEP))
    }

    /// Record elapsed time; true when a tick is due.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms = 0;
            return true;
        }
        false
    }

    /// Milliseconds until the next tick is due.
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms.saturating_sub(self.accumulated_ms)
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}
