//! The remaining object kinds: errors, argument bundles, functions, and values
//! known only by their type tag.

use alloc::rc::Rc;

use crate::value::{Identity, Value};

// ============================================================================
// VError
// ============================================================================

#[derive(Debug)]
struct ErrorInner {
    name: String,
    message: String,
}

/// An error object: a name such as `TypeError` plus a message.
#[derive(Clone)]
pub struct VError(Rc<ErrorInner>);

impl VError {
    /// A plain `Error`.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_name("Error", message)
    }

    /// An error with an arbitrary name.
    pub fn with_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        VError(Rc::new(ErrorInner {
            name: name.into(),
            message: message.into(),
        }))
    }

    /// A `TypeError`.
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::with_name("TypeError", message)
    }

    /// A `RangeError`.
    pub fn range_error(message: impl Into<String>) -> Self {
        Self::with_name("RangeError", message)
    }

    /// A `SyntaxError`.
    pub fn syntax_error(message: impl Into<String>) -> Self {
        Self::with_name("SyntaxError", message)
    }

    /// A `ReferenceError`.
    pub fn reference_error(message: impl Into<String>) -> Self {
        Self::with_name("ReferenceError", message)
    }

    /// The error's name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The error's message.
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// The identity of this error.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

// ============================================================================
// VArguments
// ============================================================================

/// The positional arguments a function was called with.
#[derive(Clone)]
pub struct VArguments(Rc<Vec<Value>>);

impl VArguments {
    /// Captures a list of arguments.
    pub fn new(args: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        VArguments(Rc::new(args.into_iter().map(Into::into).collect()))
    }

    /// The arguments, in call order.
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The identity of this bundle.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

// ============================================================================
// VFunction
// ============================================================================

type Callable = dyn Fn(&Value) -> Value;

struct FunctionInner {
    name: Option<String>,
    call: Box<Callable>,
}

/// A callable value.
///
/// The callable receives the value it was looked up on (its receiver). The
/// renderer treats functions as opaque, except when one is installed under
/// [`SHOW_KEY`](crate::SHOW_KEY), where it becomes that value's renderer.
#[derive(Clone)]
pub struct VFunction(Rc<FunctionInner>);

impl VFunction {
    /// Creates a named function.
    pub fn new(name: impl Into<String>, call: impl Fn(&Value) -> Value + 'static) -> Self {
        VFunction(Rc::new(FunctionInner {
            name: Some(name.into()),
            call: Box::new(call),
        }))
    }

    /// Creates an anonymous function.
    pub fn anonymous(call: impl Fn(&Value) -> Value + 'static) -> Self {
        VFunction(Rc::new(FunctionInner {
            name: None,
            call: Box::new(call),
        }))
    }

    /// The function's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Calls the function with `this` as receiver.
    pub fn call(&self, this: &Value) -> Value {
        (self.0.call)(this)
    }

    /// The identity of this function.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

// ============================================================================
// VOpaque
// ============================================================================

/// A value the renderer knows nothing about except its type tag, for example a
/// `WeakMap` or a `Promise`.
#[derive(Clone)]
pub struct VOpaque(Rc<str>);

impl VOpaque {
    /// Creates an opaque value with the given type tag.
    pub fn new(tag: &str) -> Self {
        VOpaque(Rc::from(tag))
    }

    /// The type tag.
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The identity of this value.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}
