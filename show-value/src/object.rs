//! Plain objects and the property keys shared with arrays.

use alloc::rc::Rc;
use core::cell::RefCell;

use indexmap::IndexMap;

use crate::symbol::{VSymbol, compare_symbols};
use crate::value::{Identity, Value};

/// The name of a property: either a string or a symbol.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// A string-named property.
    String(String),
    /// A symbol-named property.
    Symbol(VSymbol),
}

impl PropertyKey {
    /// Returns the name if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }

    /// Returns the symbol if this is a symbol key.
    pub fn as_symbol(&self) -> Option<&VSymbol> {
        match self {
            PropertyKey::String(_) => None,
            PropertyKey::Symbol(s) => Some(s),
        }
    }

    /// If this key names an array element, returns its index.
    ///
    /// Only canonical numerals count: `"0"` and `"12"` are indices, `"012"`
    /// and `"1e3"` are ordinary names.
    pub fn array_index(&self) -> Option<usize> {
        let s = self.as_str()?;
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return None;
        }
        s.parse::<u32>().ok().filter(|i| *i != u32::MAX).map(|i| i as usize)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.into())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<VSymbol> for PropertyKey {
    fn from(s: VSymbol) -> Self {
        PropertyKey::Symbol(s)
    }
}

impl From<&VSymbol> for PropertyKey {
    fn from(s: &VSymbol) -> Self {
        PropertyKey::Symbol(s.clone())
    }
}

pub(crate) type Properties = IndexMap<PropertyKey, Value>;

/// Own properties split by key kind, each half in rendering order.
pub(crate) struct SortedProperties {
    pub(crate) named: Vec<(String, Value)>,
    pub(crate) symbols: Vec<(VSymbol, Value)>,
}

impl SortedProperties {
    pub(crate) fn of(properties: &Properties) -> Self {
        let mut named = Vec::new();
        let mut symbols = Vec::new();
        for (key, value) in properties {
            match key {
                PropertyKey::String(name) => named.push((name.clone(), value.clone())),
                PropertyKey::Symbol(symbol) => symbols.push((symbol.clone(), value.clone())),
            }
        }
        // `str` ordering is byte ordering, which for UTF-8 is code point order
        named.sort_by(|(a, _), (b, _)| a.cmp(b));
        symbols.sort_by(|(a, _), (b, _)| compare_symbols(a, b));
        Self { named, symbols }
    }
}

/// A plain object: an insertion-ordered bag of own properties.
///
/// `VObject` is a shared handle; clones alias the same properties.
#[derive(Clone, Default)]
pub struct VObject(Rc<RefCell<Properties>>);

impl VObject {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the previous value if there was one.
    /// An existing property keeps its position.
    pub fn insert(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    /// Gets a property's value.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        self.0.borrow().get(&key.into()).cloned()
    }

    /// Whether the object has an own property named `key`.
    pub fn contains_key(&self, key: impl Into<PropertyKey>) -> bool {
        self.0.borrow().contains_key(&key.into())
    }

    /// Removes a property, returning its value.
    pub fn remove(&self, key: impl Into<PropertyKey>) -> Option<Value> {
        self.0.borrow_mut().shift_remove(&key.into())
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the object has no own properties.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// The property keys, in insertion order.
    pub fn keys(&self) -> Vec<PropertyKey> {
        self.0.borrow().keys().cloned().collect()
    }

    /// The properties, in insertion order.
    pub fn entries(&self) -> Vec<(PropertyKey, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Whether two handles alias the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The identity of this object.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }

    pub(crate) fn sorted_properties(&self) -> SortedProperties {
        SortedProperties::of(&self.0.borrow())
    }
}

impl<K: Into<PropertyKey>, V: Into<Value>> FromIterator<(K, V)> for VObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let properties = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        VObject(Rc::new(RefCell::new(properties)))
    }
}
