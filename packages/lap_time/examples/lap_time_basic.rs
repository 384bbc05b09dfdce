//! One-shot and repeated-interval measurement.
//!
//! Every measured lapse printed here should come out around 0.4 s.

use std::time::Duration;

use lap_time::{Clock, Stopwatch};

fn main() {
    println!("all measured lapses should be around 0.4 s");

    let clock = Clock::new();
    let mut watch = Stopwatch::<f64>::new();

    // One-shot: start, work, stop.
    watch.start(&clock);
    std::thread::sleep(Duration::from_millis(400));
    watch.stop(&clock);

    println!("{:.6} s", watch.get());

    // Repeated intervals: reset once, then update per pass.
    watch.reset(&clock);

    for _ in 0..2 {
        std::thread::sleep(Duration::from_millis(400));
        watch.update(&clock);

        println!("{:.6} s", watch.get());
    }
}
