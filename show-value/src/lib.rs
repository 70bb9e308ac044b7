#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod value;
pub use value::*;

mod symbol;
pub use symbol::*;

mod object;
pub use object::*;

mod array;
pub use array::*;

mod set;
pub use set::*;

mod map;
pub use map::*;

mod boxed;
pub use boxed::*;

mod regexp;
pub use regexp::*;

mod date;
pub use date::*;

mod other;
pub use other::*;

mod error;
pub use error::*;

mod number;
pub use number::number_to_string;

mod string;
pub use string::quote;

mod show;
pub use show::{SHOW_KEY, Show, override_for};

pub mod cycle;

mod render;
pub use render::render;

mod display;
pub use display::*;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}
