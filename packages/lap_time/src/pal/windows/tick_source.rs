use crate::Ticks;
use crate::pal::TickSource;
use crate::pal::windows::{Bindings, BindingsFacade};

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
        Ticks::from_raw(self.bindings.query_performance_counter())
    }

    fn ticks_per_second(&self) -> i64 {
        self.bindings.query_performance_frequency()
    }
}
