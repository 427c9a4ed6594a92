//! Measurement requests and the per-iteration timing record.
//!
//! All timings are wall-clock `Duration`s taken with `Instant`. Averages use
//! truncating integer division on nanoseconds, so the same samples always
//! produce the same printed mean.

use std::time::{Duration, Instant};

/// Number of output-suppressed passes run before a timed loop
pub const DEFAULT_WARMUP_PASSES: usize = 5;

/// Prefix of the trailing token that enables timing
pub const MEASURE_PREFIX: &str = "--measure";

/// How many times to run a driver, and whether to time it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasurementRequest {
    /// Timed iterations (always >= 1)
    pub loop_count: usize,
    /// Output-suppressed passes before the timed loop
    pub warmup_count: usize,
    /// Whether elapsed times are printed at all
    pub timed: bool,
}

impl MeasurementRequest {
    /// A single untimed run with no warm-up
    pub fn once() -> Self {
        Self {
            loop_count: 1,
            warmup_count: 0,
            timed: false,
        }
    }

    /// A timed run of `loop_count` iterations preceded by `warmup_count` passes
    pub fn timed(loop_count: usize, warmup_count: usize) -> Self {
        Self {
            loop_count: loop_count.max(1),
            warmup_count,
            timed: true,
        }
    }

    /// Parse a `--measure<N>` token (prefix matched case-insensitively).
    ///
    /// Returns `None` if the token is not a measure token at all. A count that
    /// fails to parse or is below 1 falls back to a single untimed run.
    pub fn from_token(token: &str, warmup_passes: usize) -> Option<Self> {
        let lowered = token.to_ascii_lowercase();
        let count = lowered.strip_prefix(MEASURE_PREFIX)?;

        Some(match count.parse::<usize>() {
            Ok(n) if n >= 1 => Self::timed(n, warmup_passes),
            _ => Self::once(),
        })
    }
}

impl Default for MeasurementRequest {
    fn default() -> Self {
        Self::once()
    }
}

/// Elapsed time of each completed iteration, in execution order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurementResult {
    elapsed: Vec<Duration>,
}

impl MeasurementResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elapsed: Vec::with_capacity(capacity),
        }
    }

    /// Record one completed iteration
    pub fn push(&mut self, elapsed: Duration) {
        self.elapsed.push(elapsed);
    }

    pub fn samples(&self) -> &[Duration] {
        &self.elapsed
    }

    pub fn len(&self) -> usize {
        self.elapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elapsed.is_empty()
    }

    /// Sum of all recorded durations
    pub fn total(&self) -> Duration {
        self.elapsed.iter().sum()
    }

    /// Arithmetic mean, truncated to whole nanoseconds. `None` when empty.
    pub fn mean(&self) -> Option<Duration> {
        if self.elapsed.is_empty() {
            return None;
        }
        let sum: u128 = self.elapsed.iter().map(Duration::as_nanos).sum();
        let avg = sum / self.elapsed.len() as u128;
        Some(Duration::from_nanos(avg.min(u64::MAX as u128) as u64))
    }
}

/// Time a single call
#[inline(always)]
pub fn time<T>(f: impl FnOnce() -> T) -> (Duration, T) {
    let start = Instant::now();
    let result = f();
    (start.elapsed(), result)
}

/// Render a duration as `<ms>ms (<ns>ns)`, both truncated
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{}ms ({}ns)", elapsed.as_millis(), elapsed.as_nanos())
}
