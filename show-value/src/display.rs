//! `Display` and `Debug` implementations backed by the renderer.

use core::fmt::{self, Debug, Display, Formatter};

use crate::render::render;
use crate::{
    PropertyKey, VArguments, VArray, VBoxed, VDate, VError, VFunction, VMap, VObject, VOpaque,
    VRegExp, VSet, VSymbol, Value,
};

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

// Handles debug-print as the value they denote.
macro_rules! impl_debug_via_render {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Debug for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    f.write_str(&render(&Value::from(self.clone())))
                }
            }
        )*
    };
}

impl_debug_via_render!(
    VSymbol, VBoxed, VRegExp, VDate, VError, VArguments, VArray, VObject, VSet, VMap, VFunction,
    VOpaque,
);

impl Debug for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(name) => Debug::fmt(name, f),
            PropertyKey::Symbol(symbol) => write!(f, "[{symbol:?}]"),
        }
    }
}

/// Display wrapper that renders a value lazily.
pub struct Rendered(Value);

impl Display for Rendered {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Extension trait for anything convertible to a [`Value`] to easily render it.
pub trait RenderExt {
    /// Get a displayable wrapper that renders this value.
    fn rendered(&self) -> Rendered;
}

impl<T: Clone + Into<Value>> RenderExt for T {
    fn rendered(&self) -> Rendered {
        Rendered(self.clone().into())
    }
}
