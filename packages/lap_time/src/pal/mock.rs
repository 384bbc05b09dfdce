use mockall::mock;

use crate::pal::{MockTickSource, Platform};

mock! {
    #[derive(Debug)]
    pub Platform {
    }

    impl Platform for Platform {
        type TickSource = MockTickSource;

        fn new_tick_source(&self) -> MockTickSource;
    }
}
