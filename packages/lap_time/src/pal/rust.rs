use std::time::Instant;

use crate::Ticks;
use crate::pal::{Platform, TickSource};

const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// We use this under Miri because Miri cannot talk to a real OS but Rust std time still works.
/// It also serves as the backend for any target without a dedicated counter implementation.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    type TickSource = TickSourceImpl;

    fn new_tick_source(&self) -> Self::TickSource {
        TickSourceImpl::new()
    }
}

/// Nanosecond ticks measured against an epoch captured when the source is created.
#[derive(Clone, Debug)]
pub(crate) struct TickSourceImpl {
    epoch: Instant,
}

impl TickSourceImpl {
    pub(crate) fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl TickSource for TickSourceImpl {
    fn now(&self) -> Ticks {
        let nanos = self.epoch.elapsed().as_nanos();

        Ticks::from_raw(i64::try_from(nanos).expect(
            "unrealistically long process lifetime, never going to happen with real clocks",
        ))
    }

    fn ticks_per_second(&self) -> i64 {
        NANOSECONDS_PER_SECOND
    }
}
