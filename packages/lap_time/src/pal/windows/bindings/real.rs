use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn query_performance_counter(&self) -> i64 {
        let mut ticks = 0_i64;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceCounter(&mut ticks) }
            .ok()
            .expect("QueryPerformanceCounter cannot fail on any supported Windows version");

        ticks
    }

    fn query_performance_frequency(&self) -> i64 {
        let mut frequency = 0_i64;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceFrequency(&mut frequency) }
            .ok()
            .expect("QueryPerformanceFrequency cannot fail on any supported Windows version");

        frequency
    }
}
