//! Sets of unique values.

use alloc::rc::Rc;
use core::cell::RefCell;

use indexmap::IndexSet;

use crate::value::{Identity, Value};

/// A set: unique elements under SameValueZero, iterated in insertion order.
///
/// `VSet` is a shared handle; clones alias the same storage.
#[derive(Clone, Default)]
pub struct VSet(Rc<RefCell<IndexSet<Value>>>);

/// `-0` is stored as `0`, as the host does for set elements and map keys.
pub(crate) fn normalize_key(value: Value) -> Value {
    match value {
        Value::Number(n) if n == 0.0 => Value::Number(0.0),
        other => other,
    }
}

impl VSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element. Returns `false` if it was already present.
    pub fn add(&self, value: impl Into<Value>) -> bool {
        self.0.borrow_mut().insert(normalize_key(value.into()))
    }

    /// Whether the set contains `value`.
    pub fn has(&self, value: &Value) -> bool {
        self.0.borrow().contains(value)
    }

    /// Removes an element, keeping the order of the rest.
    pub fn delete(&self, value: &Value) -> bool {
        self.0.borrow_mut().shift_remove(value)
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A snapshot of the elements, in iteration order.
    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().iter().cloned().collect()
    }

    /// The identity of this set.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl<T: Into<Value>> FromIterator<T> for VSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let set = VSet::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}
