mod builtins;
mod containers;
mod overrides;
mod primitives;

#[cfg(feature = "json")]
mod json;

use show_value::{Value, render};

/// Renders anything convertible to a [`Value`].
pub fn show(value: impl Into<Value>) -> String {
    render(&value.into())
}
