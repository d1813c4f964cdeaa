//! Adaptive inter-update pacing.
//!
//! Smooths the perceived token arrival rate regardless of upstream
//! burstiness: an exponential moving average tracks per-event processing
//! time, and each emitted text update is followed by a sleep that tops the
//! loop up to the current estimate. The estimate is clamped so pacing never
//! adds unbounded latency.

use std::time::Duration;

use tokio::time::Instant;

/// Delay estimate before any measurement.
const INITIAL_DELAY_MS: f64 = 20.0;
/// Lower clamp for the delay estimate.
const MIN_DELAY_MS: f64 = 10.0;
/// Upper clamp for the delay estimate.
const MAX_DELAY_MS: f64 = 30.0;
/// Smoothing factor for the moving average.
const SMOOTHING: f64 = 0.1;

/// Adaptive delay state for one stream invocation.
///
/// Created at stream start, updated once per emitted text update, and
/// discarded with the stream. Uses [`tokio::time::Instant`] so tests can run
/// against a paused clock.
#[derive(Debug)]
pub struct Pacer {
    /// Current delay estimate in milliseconds.
    target_ms: f64,
    /// End of the previous iteration, marked before its sleep so the sleep
    /// counts toward the next iteration's elapsed time.
    last_mark: Instant,
}

impl Pacer {
    pub fn new() -> Self {
        Self {
            target_ms: INITIAL_DELAY_MS,
            last_mark: Instant::now(),
        }
    }

    /// Fold one iteration's processing time into the delay estimate.
    pub fn observe(&mut self, processing: Duration) {
        let measured_ms = processing.as_secs_f64() * 1000.0;
        self.target_ms = self.target_ms * (1.0 - SMOOTHING) + measured_ms * SMOOTHING;
        self.target_ms = self.target_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
    }

    /// Current delay target.
    pub fn target(&self) -> Duration {
        Duration::from_secs_f64(self.target_ms / 1000.0)
    }

    /// How long to sleep so the current loop reaches the delay target, given
    /// the time already spent since the previous mark; never negative.
    /// Re-marks before returning, so a sleep that follows counts toward the
    /// next iteration's elapsed time.
    pub fn next_pause(&mut self) -> Duration {
        let elapsed = self.last_mark.elapsed();
        let pause = self.target().saturating_sub(elapsed);
        self.last_mark = Instant::now();
        pause
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new()
    }
}
