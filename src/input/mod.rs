// src/input/mod.rs
//! Seams around the operating system's input machinery: synthetic output for
//! the executor and the blocking capture primitive for the recorder.

pub mod driver;
pub mod listener;

pub use driver::{EnigoDriver, UiDriver};
pub use listener::{Capture, CaptureSource, RdevCaptureSource};

use rand::Rng;
use std::time::Duration;

/// Uniform draw from `[min_s, max_s]` seconds. Degenerate ranges collapse to
/// `min_s` rather than panicking in `gen_range`.
pub fn uniform_secs(min_s: f64, max_s: f64) -> Duration {
    let secs = if max_s > min_s {
        rand::thread_rng().gen_range(min_s..max_s)
    } else {
        min_s
    };
    Duration::from_secs_f64(secs.max(0.0))
}

/// Sleep for a random interval to emulate human pacing between UI actions.
pub fn human_delay(min_s: f64, max_s: f64) {
    std::thread::sleep(uniform_secs(min_s, max_s));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_draw_stays_in_bounds() {
        for _ in 0..100 {
            let d = uniform_secs(0.1, 0.4);
            assert!(d >= Duration::from_secs_f64(0.1));
            assert!(d < Duration::from_secs_f64(0.4));
        }
    }

    #[test]
    fn degenerate_range_collapses_to_min() {
        assert_eq!(uniform_secs(0.25, 0.25), Duration::from_secs_f64(0.25));
        assert_eq!(uniform_secs(0.5, 0.1), Duration::from_secs_f64(0.5));
    }
}
