//! The dynamic `Value` type and its type classifier.
//!
//! `Value` is a closed sum over every shape the renderer knows about. Primitives
//! are stored inline; everything else is a reference-counted handle, so cloning a
//! `Value` that holds an array or an object aliases the same underlying storage,
//! exactly like copying a reference in the host language. That aliasing is what
//! lets callers build self-referential graphs:
//!
//! ```
//! use show_value::{VArray, Value, render};
//!
//! let a = VArray::from_iter([1]);
//! a.push(a.clone());
//! assert_eq!(render(&Value::from(a)), "[1, <Circular>]");
//! ```

use alloc::rc::Rc;
use core::hash::{Hash, Hasher};
use core::mem;

use crate::array::VArray;
use crate::boxed::VBoxed;
use crate::date::VDate;
use crate::map::VMap;
use crate::object::VObject;
use crate::other::{VArguments, VError, VFunction, VOpaque};
use crate::regexp::VRegExp;
use crate::set::VSet;
use crate::show::Show;
use crate::symbol::VSymbol;

/// A dynamic value of the host data model.
#[derive(Clone, Default)]
pub enum Value {
    /// The `null` absence marker.
    Null,
    /// The `undefined` absence marker.
    #[default]
    Undefined,
    /// A primitive boolean.
    Boolean(bool),
    /// A primitive number (IEEE-754 double, including `NaN`, `-0` and the infinities).
    Number(f64),
    /// A primitive string.
    String(String),
    /// A unique-identity atom.
    Symbol(VSymbol),
    /// A boolean, number or string wrapped in an object.
    Boxed(VBoxed),
    /// A regular expression.
    RegExp(VRegExp),
    /// A date/time instant, possibly invalid.
    Date(VDate),
    /// An error object (name + message).
    Error(VError),
    /// A bundle of positional call arguments.
    Arguments(VArguments),
    /// An indexable collection, possibly carrying extra named properties.
    Array(VArray),
    /// A plain object with string- and symbol-named properties.
    Object(VObject),
    /// A collection of unique elements, in insertion order.
    Set(VSet),
    /// A collection of unique keys mapped to values, in insertion order.
    Map(VMap),
    /// A callable.
    Function(VFunction),
    /// A host-native value that knows how to render itself.
    Custom(Rc<dyn Show>),
    /// Anything else, known only by its type tag.
    Opaque(VOpaque),
}

/// The shape category of a [`Value`], as reported by its intrinsic type tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tag<'a> {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// Booleans, primitive or boxed
    Boolean,
    /// Numbers, primitive or boxed
    Number,
    /// Strings, primitive or boxed
    String,
    /// Symbols
    Symbol,
    /// Regular expressions
    RegExp,
    /// Dates
    Date,
    /// Errors
    Error,
    /// Argument bundles
    Arguments,
    /// Arrays
    Array,
    /// Plain objects, including host-native [`Show`] values
    Object,
    /// Sets
    Set,
    /// Maps
    Map,
    /// Functions
    Function,
    /// Any other tag
    Other(&'a str),
}

impl<'a> Tag<'a> {
    /// The tag text, e.g. `"Array"` or `"WeakMap"`.
    pub fn name(&self) -> &'a str {
        match *self {
            Tag::Null => "Null",
            Tag::Undefined => "Undefined",
            Tag::Boolean => "Boolean",
            Tag::Number => "Number",
            Tag::String => "String",
            Tag::Symbol => "Symbol",
            Tag::RegExp => "RegExp",
            Tag::Date => "Date",
            Tag::Error => "Error",
            Tag::Arguments => "Arguments",
            Tag::Array => "Array",
            Tag::Object => "Object",
            Tag::Set => "Set",
            Tag::Map => "Map",
            Tag::Function => "Function",
            Tag::Other(name) => name,
        }
    }
}

/// The identity of a heap value: the address of its shared allocation.
///
/// Two handles have the same identity exactly when they alias the same value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(usize);

impl Identity {
    pub(crate) fn of<T: ?Sized>(rc: &Rc<T>) -> Self {
        Identity(Rc::as_ptr(rc).cast::<()>() as usize)
    }
}

impl Value {
    /// Wraps a host-native value that renders itself.
    pub fn custom<T: Show + 'static>(value: T) -> Self {
        Value::Custom(Rc::new(value))
    }

    /// Classifies this value by its intrinsic type tag.
    ///
    /// Boxed primitives report the tag of the primitive they wrap; use
    /// [`Value::is_boxed`] to tell the two forms apart.
    pub fn tag(&self) -> Tag<'_> {
        match self {
            Value::Null => Tag::Null,
            Value::Undefined => Tag::Undefined,
            Value::Boolean(_) => Tag::Boolean,
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::Symbol(_) => Tag::Symbol,
            Value::Boxed(boxed) => boxed.tag(),
            Value::RegExp(_) => Tag::RegExp,
            Value::Date(_) => Tag::Date,
            Value::Error(_) => Tag::Error,
            Value::Arguments(_) => Tag::Arguments,
            Value::Array(_) => Tag::Array,
            Value::Object(_) | Value::Custom(_) => Tag::Object,
            Value::Set(_) => Tag::Set,
            Value::Map(_) => Tag::Map,
            Value::Function(_) => Tag::Function,
            Value::Opaque(opaque) => Tag::Other(opaque.tag()),
        }
    }

    /// Returns `true` for the object-wrapped forms of booleans, numbers and strings.
    pub fn is_boxed(&self) -> bool {
        matches!(self, Value::Boxed(_))
    }

    /// Returns `true` for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// The identity of this value, or `None` for primitives and symbols.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Value::Null
            | Value::Undefined
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Symbol(_) => None,
            Value::Boxed(v) => Some(v.identity()),
            Value::RegExp(v) => Some(v.identity()),
            Value::Date(v) => Some(v.identity()),
            Value::Error(v) => Some(v.identity()),
            Value::Arguments(v) => Some(v.identity()),
            Value::Array(v) => Some(v.identity()),
            Value::Object(v) => Some(v.identity()),
            Value::Set(v) => Some(v.identity()),
            Value::Map(v) => Some(v.identity()),
            Value::Function(v) => Some(v.identity()),
            Value::Custom(v) => Some(Identity::of(v)),
            Value::Opaque(v) => Some(v.identity()),
        }
    }

    /// The identity of this value if it is a container that can hold a
    /// reference back to itself (arrays, objects, sets and maps).
    pub(crate) fn composite_identity(&self) -> Option<Identity> {
        match self {
            Value::Array(v) => Some(v.identity()),
            Value::Object(v) => Some(v.identity()),
            Value::Set(v) => Some(v.identity()),
            Value::Map(v) => Some(v.identity()),
            _ => None,
        }
    }

    /// Compares two values with SameValueZero semantics: primitives by value
    /// (`NaN` equals `NaN`, `0` equals `-0`), everything else by identity.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            _ => {
                mem::discriminant(self) == mem::discriminant(other)
                    && self.identity().is_some()
                    && self.identity() == other.identity()
            }
        }
    }

    /// Returns the boolean if this is a primitive boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a primitive number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a primitive string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the symbol, if this is one.
    pub fn as_symbol(&self) -> Option<&VSymbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array handle, if this is an array.
    pub fn as_array(&self) -> Option<&VArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the object handle, if this is a plain object.
    pub fn as_object(&self) -> Option<&VObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the set handle, if this is a set.
    pub fn as_set(&self) -> Option<&VSet> {
        match self {
            Value::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the map handle, if this is a map.
    pub fn as_map(&self) -> Option<&VMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the function handle, if this is a function.
    pub fn as_function(&self) -> Option<&VFunction> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }
}

// SameValueZero: this is the equality sets and maps use to keep their
// elements and keys unique.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_zero(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Value::Null | Value::Undefined => {}
            Value::Boolean(b) => b.hash(state),
            Value::Number(n) => {
                // NaN and the two zeroes each collapse to one hash bucket
                let bits = if n.is_nan() {
                    f64::NAN.to_bits()
                } else if *n == 0.0 {
                    0
                } else {
                    n.to_bits()
                };
                bits.hash(state);
            }
            Value::String(s) => s.hash(state),
            Value::Symbol(s) => s.hash(state),
            other => other.identity().hash(state),
        }
    }
}

// === Conversions ===

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.into())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().collect())
    }
}

macro_rules! impl_from_handle {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_handle!(
    Symbol(VSymbol),
    Boxed(VBoxed),
    RegExp(VRegExp),
    Date(VDate),
    Error(VError),
    Arguments(VArguments),
    Array(VArray),
    Object(VObject),
    Set(VSet),
    Map(VMap),
    Function(VFunction),
    Opaque(VOpaque),
);

impl From<Rc<dyn Show>> for Value {
    fn from(v: Rc<dyn Show>) -> Self {
        Value::Custom(v)
    }
}
