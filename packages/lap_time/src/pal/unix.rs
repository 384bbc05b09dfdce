mod bindings;
mod platform;
mod tick_source;

pub(crate) use bindings::*;
pub(crate) use platform::*;
pub(crate) use tick_source::*;
