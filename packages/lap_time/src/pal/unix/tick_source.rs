use crate::Ticks;
use crate::pal::TickSource;
use crate::pal::unix::{Bindings, BindingsFacade};

/// Ticks on unix targets are monotonic clock nanoseconds, so the counter frequency
/// is the nanosecond rate by construction and needs no syscall to obtain.
pub(crate) const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;

#[derive(Clone, Debug)]
pub(crate) struct TickSourceImpl {
    bindings: BindingsFacade,
}

impl TickSourceImpl {
    pub(crate) fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl TickSource for TickSourceImpl {
    fn now(&self) -> Ticks {
        Ticks::from_raw(self.bindings.clock_gettime_nanos())
    }

    fn ticks_per_second(&self) -> i64 {
        NANOSECONDS_PER_SECOND
    }
}
