use num_traits::Float;

use crate::{Clock, Ticks};

/// Measures the elapsed time between two points in code, in seconds.
///
/// A stopwatch is a passive value: nothing happens between calls, every
/// operation samples the clock it is handed and returns immediately. The
/// numeric type parameter selects the precision of the reported duration;
/// `f64` and `f32` are the typical instantiations.
///
/// All measuring operations borrow a [`Clock`]. Use the same clock for every
/// call on a given stopwatch; the tick samples of two different clocks are not
/// comparable.
///
/// A stopwatch may be moved freely and reused indefinitely. It is a plain
/// value with no interior mutability, so sharing one between threads requires
/// external synchronization, while each thread owning its own stopwatch (all
/// borrowing one shared clock) needs none.
///
/// # One-shot measurement
///
/// ```rust
/// use std::time::Duration;
///
/// use lap_time::{Clock, Stopwatch};
///
/// let clock = Clock::new();
/// let mut watch = Stopwatch::<f64>::new();
///
/// watch.start(&clock);
/// std::thread::sleep(Duration::from_millis(10));
/// watch.stop(&clock);
///
/// assert!(watch.get() >= 0.01);
/// ```
///
/// # Repeated intervals
///
/// Each [`update()`][Self::update] reports the time since the previous update,
/// not since the beginning:
///
/// ```rust
/// use std::time::Duration;
///
/// use lap_time::{Clock, Stopwatch};
///
/// let clock = Clock::new();
/// let mut watch = Stopwatch::<f64>::new();
///
/// watch.reset(&clock);
///
/// for _ in 0..3 {
///     std::thread::sleep(Duration::from_millis(5));
///     watch.update(&clock);
///
///     // Per-interval duration, never cumulative.
///     assert!(watch.get() < 1.0);
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch<T> {
    begin: Ticks,
    end: Ticks,

    /// Last committed duration in seconds. Never reflects a rejected threshold check.
    diff: T,
}

impl<T: Float> Stopwatch<T> {
    /// Creates a stopwatch holding the zero sample and a zero duration.
    ///
    /// No clock is touched; the first measurement begins with
    /// [`start()`][Self::start] or [`reset()`][Self::reset].
    #[must_use]
    pub fn new() -> Self {
        Self {
            begin: Ticks::default(),
            end: Ticks::default(),
            diff: T::zero(),
        }
    }

    /// Marks the beginning of a measurement interval.
    ///
    /// Overwrites the begin sample only; the end sample and the last reported
    /// duration are untouched until a committing operation runs.
    pub fn start(&mut self, clock: &Clock) {
        self.begin = clock.now();
    }

    /// Marks the end of the measurement interval and commits the elapsed
    /// duration, in seconds, since the last [`start()`][Self::start] or
    /// [`reset()`][Self::reset].
    ///
    /// Unconditional: calling it again later commits a new, longer duration
    /// measured from the same begin sample.
    pub fn stop(&mut self, clock: &Clock) {
        let end = clock.now();

        self.end = end;
        self.diff = Self::seconds_of(clock, self.begin, end);
    }

    /// Like [`stop()`][Self::stop], but only commits when the elapsed duration
    /// is strictly greater than `threshold` seconds.
    ///
    /// On a rejected check nothing is mutated: [`get()`][Self::get] keeps
    /// returning the previously committed duration, and the interval keeps
    /// running from its original begin sample.
    ///
    /// ```rust
    /// use lap_time::{Clock, Stopwatch};
    ///
    /// let clock = Clock::new();
    /// let mut watch = Stopwatch::<f64>::new();
    ///
    /// watch.start(&clock);
    ///
    /// // Nowhere near a minute yet; the rejected check left no trace.
    /// assert!(!watch.stop_if_above(&clock, 60.0));
    /// assert_eq!(watch.get(), 0.0);
    /// ```
    #[must_use]
    pub fn stop_if_above(&mut self, clock: &Clock, threshold: T) -> bool {
        let candidate_end = clock.now();
        let candidate = Self::seconds_of(clock, self.begin, candidate_end);

        if candidate > threshold {
            self.end = candidate_end;
            self.diff = candidate;

            true
        } else {
            false
        }
    }

    /// Commits the duration since the previous checkpoint and re-arms the
    /// interval to begin at this one.
    ///
    /// Calling this in a loop reports each gap between consecutive calls,
    /// never a cumulative total.
    pub fn update(&mut self, clock: &Clock) {
        self.stop(clock);
        self.begin = self.end;
    }

    /// The threshold-gated counterpart of [`update()`][Self::update]: commits
    /// and re-arms only when the duration since the current checkpoint is
    /// strictly greater than `threshold` seconds.
    ///
    /// On failure nothing is mutated, so a later call still measures from the
    /// original checkpoint. Polled in a loop, this returns `true` exactly once
    /// per elapsed threshold-sized interval, measuring onward from each commit:
    ///
    /// ```rust
    /// use lap_time::{Clock, Stopwatch};
    ///
    /// let clock = Clock::new();
    /// let mut watch = Stopwatch::<f64>::new();
    ///
    /// watch.reset(&clock);
    ///
    /// let mut laps = 0;
    /// while laps < 3 {
    ///     if watch.update_if_above(&clock, 0.005) {
    ///         laps += 1;
    ///         assert!(watch.get() > 0.005);
    ///     }
    /// }
    /// ```
    #[must_use]
    pub fn update_if_above(&mut self, clock: &Clock, threshold: T) -> bool {
        if self.stop_if_above(clock, threshold) {
            self.begin = self.end;

            true
        } else {
            false
        }
    }

    /// Establishes a new zero-length interval starting now and zeroes the
    /// reported duration.
    ///
    /// The usual setup step before a sequence of [`update()`][Self::update] or
    /// [`update_if_above()`][Self::update_if_above] calls.
    pub fn reset(&mut self, clock: &Clock) {
        self.begin = clock.now();
        self.end = self.begin;
        self.diff = T::zero();
    }

    /// Returns the last committed duration in seconds, without sampling the clock.
    ///
    /// This is the duration established by the most recent committing operation
    /// ([`stop()`][Self::stop], [`update()`][Self::update], or a successful
    /// threshold-gated variant). Before any committing call it returns zero.
    #[must_use]
    pub fn get(&self) -> T {
        self.diff
    }

    /// Converts a tick interval to seconds using the clock's cached frequency.
    ///
    /// Both the tick delta and the frequency convert directly to `T`; there is
    /// no narrower intermediate representation.
    fn seconds_of(clock: &Clock, begin: Ticks, end: Ticks) -> T {
        let elapsed = T::from(end.ticks_since(begin))
            .expect("an i64 tick delta always converts to a floating point value");

        let per_second = T::from(clock.ticks_per_second().get())
            .expect("an i64 tick frequency always converts to a floating point value");

        elapsed / per_second
    }
}

impl<T: Float> Default for Stopwatch<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::pal::{MockPlatform, MockTickSource};

    assert_impl_all!(Stopwatch<f32>: Send, Sync);
    assert_impl_all!(Stopwatch<f64>: Send, Sync);

    /// A clock over a mock tick source that replays `samples` in order, one per
    /// operation that samples the counter, at the given frequency.
    fn scripted_clock(frequency: i64, samples: &[i64]) -> Clock {
        let mut tick_source = MockTickSource::new();

        tick_source
            .expect_ticks_per_second()
            .return_const(frequency);

        let mut seq = Sequence::new();

        for sample in samples {
            let sample = *sample;

            tick_source
                .expect_now()
                .once()
                .in_sequence(&mut seq)
                .returning(move || Ticks::from_raw(sample));
        }

        let mut platform = MockPlatform::new();

        platform
            .expect_new_tick_source()
            .once()
            .return_once(move || tick_source);

        Clock::from_pal(&platform.into())
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "the pre-measurement value is an exact zero")]
    fn fresh_stopwatch_reads_zero() {
        let watch = Stopwatch::<f64>::new();

        assert_eq!(watch.get(), 0.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn start_then_stop_commits_elapsed_interval() {
        let clock = scripted_clock(1_000, &[100, 350]);
        let mut watch = Stopwatch::<f64>::new();

        watch.start(&clock);
        watch.stop(&clock);

        assert_eq!(watch.get(), 0.25);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn stop_measures_from_same_origin_each_time() {
        let clock = scripted_clock(1_000, &[100, 350, 600]);
        let mut watch = Stopwatch::<f64>::new();

        watch.start(&clock);

        watch.stop(&clock);
        assert_eq!(watch.get(), 0.25);

        // A second stop commits a longer duration from the unchanged begin sample.
        watch.stop(&clock);
        assert_eq!(watch.get(), 0.5);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn stop_if_above_rejects_at_threshold_without_mutation() {
        let clock = scripted_clock(1_000, &[0, 250, 500]);
        let mut watch = Stopwatch::<f64>::new();

        watch.start(&clock);

        // Exactly at the threshold is a rejection; the comparison is strict.
        assert!(!watch.stop_if_above(&clock, 0.25));
        assert_eq!(watch.get(), 0.0);

        assert!(watch.stop_if_above(&clock, 0.25));
        assert_eq!(watch.get(), 0.5);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn stop_if_above_success_does_not_rearm_begin() {
        let clock = scripted_clock(1_000, &[0, 300, 500]);
        let mut watch = Stopwatch::<f64>::new();

        watch.start(&clock);

        assert!(watch.stop_if_above(&clock, 0.1));
        assert_eq!(watch.get(), 0.3);

        // Unlike update_if_above, a later stop still measures from the original begin.
        watch.stop(&clock);
        assert_eq!(watch.get(), 0.5);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn update_reports_consecutive_intervals_not_cumulative() {
        let clock = scripted_clock(1_000, &[0, 250, 750]);
        let mut watch = Stopwatch::<f64>::new();

        watch.reset(&clock);

        watch.update(&clock);
        assert_eq!(watch.get(), 0.25);

        watch.update(&clock);
        assert_eq!(watch.get(), 0.5);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn update_if_above_failure_keeps_the_original_checkpoint() {
        let clock = scripted_clock(1_000, &[0, 250, 750]);
        let mut watch = Stopwatch::<f64>::new();

        watch.reset(&clock);

        assert!(!watch.update_if_above(&clock, 0.5));
        assert_eq!(watch.get(), 0.0);

        // Measured from the reset point, not from the rejected attempt.
        assert!(watch.update_if_above(&clock, 0.5));
        assert_eq!(watch.get(), 0.75);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn update_if_above_fires_once_per_elapsed_interval() {
        // A poll every 400 ms against a one second threshold: fires on the
        // third poll (1.2 s elapsed), re-arms, then fires again three polls later.
        let clock = scripted_clock(1_000, &[0, 400, 800, 1_200, 1_600, 2_000, 2_400]);
        let mut watch = Stopwatch::<f64>::new();

        watch.reset(&clock);

        assert!(!watch.update_if_above(&clock, 1.0));
        assert_eq!(watch.get(), 0.0);

        assert!(!watch.update_if_above(&clock, 1.0));
        assert_eq!(watch.get(), 0.0);

        assert!(watch.update_if_above(&clock, 1.0));
        assert_eq!(watch.get(), 1.2);

        assert!(!watch.update_if_above(&clock, 1.0));
        assert_eq!(watch.get(), 1.2);

        assert!(!watch.update_if_above(&clock, 1.0));
        assert_eq!(watch.get(), 1.2);

        assert!(watch.update_if_above(&clock, 1.0));
        assert_eq!(watch.get(), 1.2);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "reset commits an exact zero")]
    fn reset_establishes_zero_length_interval() {
        let clock = scripted_clock(1_000, &[100, 600, 1_000, 1_250]);
        let mut watch = Stopwatch::<f64>::new();

        watch.start(&clock);
        watch.stop(&clock);
        assert_eq!(watch.get(), 0.5);

        watch.reset(&clock);
        assert_eq!(watch.get(), 0.0);

        // The next interval is measured from the reset point.
        watch.update(&clock);
        assert_eq!(watch.get(), 0.25);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "scripted ticks produce exact quotients")]
    fn single_precision_instantiation_measures_the_same_interval() {
        let clock = scripted_clock(1_000, &[0, 250]);
        let mut watch = Stopwatch::<f32>::new();

        watch.start(&clock);
        watch.stop(&clock);

        assert_eq!(watch.get(), 0.25_f32);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "the pre-measurement value is an exact zero")]
    fn get_never_samples_the_clock() {
        // No `now()` expectations at all; any sampling would panic the mock.
        let clock = scripted_clock(1_000, &[]);
        let watch = Stopwatch::<f64>::new();

        assert_eq!(watch.get(), 0.0);
        assert_eq!(watch.get(), 0.0);

        drop(clock);
    }
}
