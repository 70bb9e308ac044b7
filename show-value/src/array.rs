//! Arrays: dense elements, a sparse tail, and any extra named properties.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::object::{Properties, PropertyKey, SortedProperties};
use crate::value::{Identity, Value};

#[derive(Default)]
struct ArrayData {
    elements: Vec<Value>,
    // elements written past the dense end, every key > elements.len()
    sparse: BTreeMap<usize, Value>,
    properties: Properties,
}

impl ArrayData {
    fn len(&self) -> usize {
        self.sparse
            .last_key_value()
            .map_or(self.elements.len(), |(index, _)| index + 1)
    }

    fn set(&mut self, index: usize, value: Value) {
        let dense = self.elements.len();
        if index < dense {
            self.elements[index] = value;
        } else if index == dense {
            self.elements.push(value);
            while let Some(next) = self.sparse.remove(&self.elements.len()) {
                self.elements.push(next);
            }
        } else {
            self.sparse.insert(index, value);
        }
    }
}

/// An array.
///
/// Besides its elements an array may carry arbitrary named properties, string-
/// or symbol-keyed. Setting a property whose name is a canonical index stores an
/// element instead.
///
/// Elements form a dense run from index 0. An element written beyond the end of
/// that run leaves a hole: it is kept by index, nothing is padded, and it joins
/// the run once the gap before it is filled.
///
/// `VArray` is a shared handle; clones alias the same storage.
#[derive(Clone, Default)]
pub struct VArray(Rc<RefCell<ArrayData>>);

impl VArray {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array with room for `cap` elements.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        VArray(Rc::new(RefCell::new(ArrayData {
            elements: Vec::with_capacity(cap),
            sparse: BTreeMap::new(),
            properties: Properties::default(),
        })))
    }

    /// One past the highest index holding an element.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        let data = self.0.borrow();
        data.elements.is_empty() && data.sparse.is_empty()
    }

    /// Appends an element at index [`len`](Self::len).
    pub fn push(&self, value: impl Into<Value>) {
        let mut data = self.0.borrow_mut();
        let index = data.len();
        data.set(index, value.into());
    }

    /// Removes and returns the element with the highest index.
    pub fn pop(&self) -> Option<Value> {
        let mut data = self.0.borrow_mut();
        match data.sparse.pop_last() {
            Some((_, value)) => Some(value),
            None => data.elements.pop(),
        }
    }

    /// Gets the element at `index`; `None` for a hole.
    pub fn get(&self, index: usize) -> Option<Value> {
        let data = self.0.borrow();
        data.elements
            .get(index)
            .or_else(|| data.sparse.get(&index))
            .cloned()
    }

    /// Stores an element at `index`. Writing past the end leaves holes.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        self.0.borrow_mut().set(index, value.into());
    }

    /// A snapshot of the dense run of elements starting at index 0.
    pub fn elements(&self) -> Vec<Value> {
        self.0.borrow().elements.clone()
    }

    /// A snapshot of the elements after the first hole, by ascending index.
    pub fn sparse_elements(&self) -> Vec<(usize, Value)> {
        self.0
            .borrow()
            .sparse
            .iter()
            .map(|(index, value)| (*index, value.clone()))
            .collect()
    }

    /// Sets a named property. Canonical index names (`"0"`, `"7"`) write
    /// elements; everything else is kept as a named property.
    pub fn set_property(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) {
        let key = key.into();
        match key.array_index() {
            Some(index) => self.set(index, value),
            None => {
                self.0.borrow_mut().properties.insert(key, value.into());
            }
        }
    }

    /// Gets a named property (or, for an index name, the element).
    pub fn property(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        let key = key.into();
        match key.array_index() {
            Some(index) => self.get(index),
            None => self.0.borrow().properties.get(&key).cloned(),
        }
    }

    /// Number of named (non-element) properties.
    pub fn property_count(&self) -> usize {
        self.0.borrow().properties.len()
    }

    /// Whether two handles alias the same array.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The identity of this array.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    pub(crate) fn sorted_properties(&self) -> SortedProperties {
        SortedProperties::of(&self.0.borrow().properties)
    }
}

impl<T: Into<Value>> FromIterator<T> for VArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VArray(Rc::new(RefCell::new(ArrayData {
            elements: iter.into_iter().map(Into::into).collect(),
            sparse: BTreeMap::new(),
            properties: Properties::default(),
        })))
    }
}

impl<T: Into<Value>> From<Vec<T>> for VArray {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}
