//! This module implements functionality for measuring and summarizing the duration of some task.

use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Returns the median of `durations`, sorting them in the process. For an even number of samples
/// the mean of the two middle samples is used.
///
/// Returns `None` if there are no samples.
pub fn median(durations: &mut [Duration]) -> Option<Duration> {
    let len = durations.len();
    if len == 0 {
        return None;
    }

    durations.sort_unstable();

    let mid = len / 2;
    if len % 2 == 1 {
        Some(durations[mid])
    } else {
        Some((durations[mid - 1] + durations[mid]) / 2)
    }
}
