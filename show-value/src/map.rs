//! Maps from unique keys to values.

use alloc::rc::Rc;
use core::cell::RefCell;

use indexmap::IndexMap;

use crate::set::normalize_key;
use crate::value::{Identity, Value};

/// A map: keys unique under SameValueZero, iterated in insertion order.
///
/// `VMap` is a shared handle; clones alias the same storage.
#[derive(Clone, Default)]
pub struct VMap(Rc<RefCell<IndexMap<Value, Value>>>);

impl VMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `key` to `value`. An existing key keeps its position.
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        self.0
            .borrow_mut()
            .insert(normalize_key(key.into()), value.into())
    }

    /// Gets the value for `key`.
    pub fn get(&self, key: &Value) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Whether `key` is present.
    pub fn has(&self, key: &Value) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Removes `key`, keeping the order of the rest.
    pub fn delete(&self, key: &Value) -> Option<Value> {
        self.0.borrow_mut().shift_remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A snapshot of the entries, in iteration order.
    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// The identity of this map.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for VMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = VMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}
