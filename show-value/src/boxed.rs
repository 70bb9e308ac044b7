//! Object-wrapped primitives.

use alloc::rc::Rc;

use crate::value::{Identity, Tag, Value};

/// The primitive held by a [`VBoxed`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A boolean
    Boolean(bool),
    /// A number
    Number(f64),
    /// A string
    String(String),
}

/// A boxed boolean, number or string.
///
/// Unlike the primitive it wraps, a box has identity: two boxes around the same
/// primitive are distinct values.
#[derive(Clone)]
pub struct VBoxed(Rc<Primitive>);

impl VBoxed {
    /// Boxes a boolean.
    pub fn boolean(b: bool) -> Self {
        VBoxed(Rc::new(Primitive::Boolean(b)))
    }

    /// Boxes a number.
    pub fn number(n: f64) -> Self {
        VBoxed(Rc::new(Primitive::Number(n)))
    }

    /// Boxes a string.
    pub fn string(s: impl Into<String>) -> Self {
        VBoxed(Rc::new(Primitive::String(s.into())))
    }

    /// The wrapped primitive.
    pub fn primitive(&self) -> &Primitive {
        &self.0
    }

    /// Unwraps to the primitive value.
    pub fn value_of(&self) -> Value {
        match self.primitive() {
            Primitive::Boolean(b) => Value::Boolean(*b),
            Primitive::Number(n) => Value::Number(*n),
            Primitive::String(s) => Value::String(s.clone()),
        }
    }

    pub(crate) fn tag(&self) -> Tag<'static> {
        match self.primitive() {
            Primitive::Boolean(_) => Tag::Boolean,
            Primitive::Number(_) => Tag::Number,
            Primitive::String(_) => Tag::String,
        }
    }

    /// The identity of this box.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}
