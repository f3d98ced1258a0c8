//! Timing helpers for the driver.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Bytes touched by [`flush_cache`]; larger than common last-level caches.
const FLUSH_BYTES: usize = 64 * 1024 * 1024;

/// Evicts the caches by streaming through a large scratch buffer.
pub fn flush_cache() {
    let mut buf = vec![0u8; FLUSH_BYTES];
    for (i, byte) in buf.iter_mut().enumerate().step_by(64) {
        *byte = i as u8;
    }
    let sum = buf.iter().step_by(64).fold(0u64, |acc, &b| acc + b as u64);
    black_box(sum);
}

/// Runs `func`, prints how long it took and returns its result with the time.
pub fn timed<T, F>(label: &str, func: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = black_box(func());
    let duration = start.elapsed();
    println!("{} completed in: {:.4?}", label, duration);
    (result, duration)
}
