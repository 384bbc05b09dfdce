//! Measures the elapsed time between two points in a program's execution.
//!
//! This package provides a [`Stopwatch`] that reports the duration between
//! explicit checkpoints in code as seconds in a floating point type of your
//! choice, sampling the host's highest-resolution monotonic counter through a
//! shared [`Clock`]. It is intended for ad-hoc performance measurement and for
//! simple periodic-interval detection ("has at least X seconds passed since
//! the last checkpoint?").
//!
//! # Key Features
//!
//! - **Monotonic**: immune to wall clock adjustments such as NTP synchronization
//! - **Passive**: every operation is a direct computation that returns
//!   immediately; no background activity, no allocation, no locks
//! - **Generic precision**: report durations as `f64`, `f32`, or any other
//!   floating point type
//! - **Threshold polling**: detect elapsed-interval boundaries without
//!   perturbing the running measurement
//!
//! # Trade-offs
//!
//! - Not a calendar clock; samples are only meaningful relative to each other
//! - No accumulated totals across pauses; each committed interval stands alone
//!
//! # One-shot measurement
//!
//! ```rust
//! use std::time::Duration;
//!
//! use lap_time::{Clock, Stopwatch};
//!
//! let clock = Clock::new();
//! let mut watch = Stopwatch::<f64>::new();
//!
//! watch.start(&clock);
//!
//! // Do some work...
//! std::thread::sleep(Duration::from_millis(10));
//!
//! watch.stop(&clock);
//! println!("work took {:.6} s", watch.get());
//! ```
//!
//! # Interval polling
//!
//! [`Stopwatch::update_if_above()`] commits and re-arms only once the threshold
//! has elapsed, so polling it in a loop yields `true` exactly once per interval:
//!
//! ```rust
//! use lap_time::{Clock, Stopwatch};
//!
//! let clock = Clock::new();
//! let mut watch = Stopwatch::<f64>::new();
//!
//! watch.reset(&clock);
//!
//! let mut iterations: u64 = 0;
//! let mut laps = 0;
//!
//! while laps < 2 {
//!     iterations += 1;
//!
//!     if watch.update_if_above(&clock, 0.005) {
//!         laps += 1;
//!         println!("{:.6} s elapsed after {iterations} iterations", watch.get());
//!     }
//! }
//! ```

mod pal;

mod clock;
mod stopwatch;
mod ticks;

pub use clock::*;
pub use stopwatch::*;
pub use ticks::*;
