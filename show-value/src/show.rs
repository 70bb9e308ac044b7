//! The override capability: values that render themselves.

use crate::render::render;
use crate::value::Value;
use crate::debug;

/// The reserved property name under which a dynamic value can carry its own
/// renderer.
///
/// An object or array whose own property `@@show` holds a [`VFunction`] is
/// rendered by calling that function with the value as receiver. The receiver
/// is not marked as in progress while the function runs, so the function must
/// not render the receiver itself.
///
/// [`VFunction`]: crate::VFunction
pub const SHOW_KEY: &str = "@@show";

/// A host-native value that knows how to render itself.
///
/// Wrap implementors with [`Value::custom`]. Implementations may call
/// [`render`] on the values they hold; cycles through those nested calls are
/// still detected, since the in-progress set is shared by every render on the
/// thread.
///
/// ```
/// use show_value::{Show, Value, render};
///
/// struct Point(f64, f64);
///
/// impl Show for Point {
///     fn show(&self) -> String {
///         let (x, y) = (Value::from(self.0), Value::from(self.1));
///         format!("Point ({}, {})", render(&x), render(&y))
///     }
/// }
///
/// assert_eq!(render(&Value::custom(Point(1.0, -0.0))), "Point (1, -0)");
/// ```
pub trait Show {
    /// The complete textual representation of `self`.
    fn show(&self) -> String;
}

/// Returns the override rendering of `value`, if it has one.
///
/// Absent values never have one. A `String` returned by a [`SHOW_KEY`] function
/// is used verbatim; any other result is itself rendered.
pub fn override_for(value: &Value) -> Option<String> {
    let hook = match value {
        Value::Null | Value::Undefined => return None,
        Value::Custom(custom) => {
            debug!("rendering host-native value through its Show impl");
            return Some(custom.show());
        }
        Value::Object(obj) => obj.get(SHOW_KEY)?,
        Value::Array(arr) => arr.property(SHOW_KEY)?,
        _ => return None,
    };
    let Value::Function(hook) = hook else {
        return None;
    };

    debug!(hook = hook.name(), "rendering through {SHOW_KEY}");
    match hook.call(value) {
        Value::String(text) => Some(text),
        other => Some(render(&other)),
    }
}
