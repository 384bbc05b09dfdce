use std::fmt::Debug;

use crate::Ticks;

pub(crate) trait Platform: Debug + Send + Sync + 'static {
    type TickSource: TickSource;

    fn new_tick_source(&self) -> Self::TickSource;
}

/// The minimal capability a platform must provide: a current counter sample and the
/// fixed tick frequency of that counter. Everything above this trait is platform-agnostic.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TickSource: Debug + Send + Sync {
    fn now(&self) -> Ticks;

    fn ticks_per_second(&self) -> i64;
}
