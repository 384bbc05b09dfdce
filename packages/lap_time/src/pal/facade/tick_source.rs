use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

use crate::Ticks;
#[cfg(test)]
use crate::pal::MockTickSource;
use crate::pal::{TickSource, TickSourceImpl};

pub(crate) enum TickSourceFacade {
    Real(TickSourceImpl),

    #[cfg(test)]
    Mock(Arc<MockTickSource>),
}

impl From<TickSourceImpl> for TickSourceFacade {
    fn from(ts: TickSourceImpl) -> Self {
        Self::Real(ts)
    }
}

#[cfg(test)]
impl From<MockTickSource> for TickSourceFacade {
    fn from(ts: MockTickSource) -> Self {
        Self::Mock(Arc::new(ts))
    }
}

impl TickSource for TickSourceFacade {
    fn now(&self) -> Ticks {
        match self {
            Self::Real(ts) => ts.now(),
            #[cfg(test)]
            Self::Mock(ts) => ts.now(),
        }
    }

    fn ticks_per_second(&self) -> i64 {
        match self {
            Self::Real(ts) => ts.ticks_per_second(),
            #[cfg(test)]
            Self::Mock(ts) => ts.ticks_per_second(),
        }
    }
}

impl Debug for TickSourceFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(ts) => ts.fmt(f),
            #[cfg(test)]
            Self::Mock(ts) => ts.fmt(f),
        }
    }
}
