/*!
 * Simulation Timer
 * Lap timer for status-line timestamps and synchronous operation delays
 *
 * # Clocks
 *
 * - **WallClock**: real elapsed time; delays sleep the driving thread
 * - **VirtualClock**: delays advance a counter instantly, so traces are
 *   reproducible and test runs do not sleep
 */

use std::thread;
use std::time::{Duration, Instant};

/// Time source driving a simulation run
///
/// All calls happen on the single simulation thread. A `wait` always runs
/// to completion; there is no cancellation.
pub trait Clock {
    /// Zero the timer; later laps are measured from here
    fn reset(&mut self);

    /// Time elapsed since the last reset
    fn lap(&mut self) -> Duration;

    /// Block for the simulated duration of one operation
    fn wait(&mut self, duration: Duration);
}

/// Real-time clock backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct WallClock {
    zero: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            zero: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn reset(&mut self) {
        self.zero = Instant::now();
    }

    fn lap(&mut self) -> Duration {
        self.zero.elapsed()
    }

    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Deterministic clock: waits add to the elapsed time without sleeping
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    elapsed: Duration,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for VirtualClock {
    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn lap(&mut self) -> Duration {
        self.elapsed
    }

    fn wait(&mut self, duration: Duration) {
        self.elapsed += duration;
    }
}

/// Render a lap as `seconds.microseconds`, e.g. `0.010042`
pub fn format_timestamp(elapsed: Duration) -> String {
    format!("{}.{:06}", elapsed.as_secs(), elapsed.subsec_micros())
}
