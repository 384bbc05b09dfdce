//! Detecting elapsed-interval boundaries by polling.
//!
//! Polls `update_if_above` on every pass of a busy loop; it returns `true`
//! exactly once per elapsed second, at which point we report the committed
//! duration and how many polls it took to get there.

use std::time::Duration;

use lap_time::{Clock, Stopwatch};

fn main() {
    let clock = Clock::new();
    let mut watch = Stopwatch::<f64>::new();

    watch.reset(&clock);

    let mut iterations: u64 = 0;
    let mut laps = 0;

    while laps < 3 {
        std::thread::sleep(Duration::from_millis(25));
        iterations = iterations.wrapping_add(1);

        if watch.update_if_above(&clock, 1.0) {
            laps += 1;
            println!(
                "lap {laps}: {:.6} s after {iterations} polls",
                watch.get()
            );
            iterations = 0;
        }
    }
}
