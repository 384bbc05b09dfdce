use std::num::NonZero;

use crate::Ticks;
use crate::pal::{Platform, PlatformFacade, TickSource, TickSourceFacade};

/// A handle to the monotonic counter of the host, with the counter frequency
/// queried once and cached for the lifetime of the clock.
///
/// The counter frequency is fixed at system boot and consistent across all
/// processors, so querying it once is sufficient. Create one clock per process
/// and share it by reference with every [`Stopwatch`][1] that measures through it;
/// the cached frequency may be read concurrently from any number of threads.
///
/// The counter never decreases and is unaffected by wall clock adjustments
/// (e.g. NTP synchronization), which makes it suitable for measuring elapsed
/// time but useless for telling calendar time.
///
/// # Examples
///
/// ```rust
/// use lap_time::Clock;
///
/// let clock = Clock::new();
///
/// let before = clock.now();
/// let after = clock.now();
///
/// assert!(after >= before);
/// assert!(clock.ticks_per_second().get() > 0);
/// ```
///
/// [1]: crate::Stopwatch
#[derive(Debug)]
pub struct Clock {
    tick_source: TickSourceFacade,

    ticks_per_second: NonZero<i64>,
}

impl Clock {
    /// Creates a clock bound to the monotonic counter of the build target platform.
    ///
    /// This is the only moment the counter frequency is queried; all conversions
    /// performed through this clock reuse the cached value.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pal(&PlatformFacade::real())
    }

    pub(crate) fn from_pal(pal: &PlatformFacade) -> Self {
        let tick_source = pal.new_tick_source();

        let ticks_per_second = NonZero::new(tick_source.ticks_per_second())
            .expect("monotonic counter frequency is fixed at boot and never zero");

        Self {
            tick_source,
            ticks_per_second,
        }
    }

    /// Samples the current value of the monotonic counter.
    #[must_use]
    pub fn now(&self) -> Ticks {
        self.tick_source.now()
    }

    /// The number of counter ticks per second, cached when the clock was created.
    #[must_use]
    pub fn ticks_per_second(&self) -> NonZero<i64> {
        self.ticks_per_second
    }
}

impl Default for Clock {
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

    assert_impl_all!(Clock: Send, Sync);

    #[test]
    fn frequency_is_queried_once_and_cached() {
        let mut tick_source = MockTickSource::new();

        tick_source
            .expect_ticks_per_second()
            .once()
            .return_const(1_000_i64);

        let mut platform = MockPlatform::new();

        platform
            .expect_new_tick_source()
            .once()
            .return_once(move || tick_source);

        let clock = Clock::from_pal(&platform.into());

        // Repeated reads come from the cache; the mock would panic on a second query.
        assert_eq!(clock.ticks_per_second().get(), 1_000);
        assert_eq!(clock.ticks_per_second().get(), 1_000);
    }

    #[test]
    fn now_returns_samples_in_order_given() {
        let mut tick_source = MockTickSource::new();

        tick_source
            .expect_ticks_per_second()
            .return_const(1_000_i64);

        let mut seq = Sequence::new();

        tick_source
            .expect_now()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ticks::from_raw(100));

        tick_source
            .expect_now()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ticks::from_raw(350));

        let mut platform = MockPlatform::new();

        platform
            .expect_new_tick_source()
            .once()
            .return_once(move || tick_source);

        let clock = Clock::from_pal(&platform.into());

        let a = clock.now();
        let b = clock.now();

        assert_eq!(b.ticks_since(a), 250);
    }

    #[cfg(not(miri))] // Miri talks to the passthrough platform, not the real one.
    #[test]
    fn real_counter_is_monotonic() {
        let clock = Clock::new();

        let a = clock.now();
        let b = clock.now();

        assert!(b >= a);
        assert!(clock.ticks_per_second().get() > 0);
    }
}
