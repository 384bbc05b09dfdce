//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `lap_time` package `README.md`.

fn main() {
    use lap_time::{Clock, Stopwatch};

    // One clock per process; every stopwatch borrows it.
    let clock = Clock::new();
    let mut watch = Stopwatch::<f64>::new();

    // One-shot measurement.
    watch.start(&clock);

    // Simulate some work
    std::thread::sleep(std::time::Duration::from_millis(10));

    watch.stop(&clock);
    println!("work completed in {:.6} s", watch.get());

    // Detect elapsed-interval boundaries without perturbing the measurement.
    watch.reset(&clock);

    let mut laps = 0;
    while laps < 3 {
        if watch.update_if_above(&clock, 0.005) {
            laps += 1;
            println!("lap {laps}: {:.6} s", watch.get());
        }
    }
}
