//! Symbols: atoms with reference identity and an optional description.

use alloc::rc::Rc;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::cell::RefCell;
use std::collections::HashMap;

use crate::value::Identity;

/// The fixed registry of language-defined symbols.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WellKnownSymbol {
    /// `Symbol.asyncIterator`
    AsyncIterator,
    /// `Symbol.hasInstance`
    HasInstance,
    /// `Symbol.isConcatSpreadable`
    IsConcatSpreadable,
    /// `Symbol.iterator`
    Iterator,
    /// `Symbol.match`
    Match,
    /// `Symbol.matchAll`
    MatchAll,
    /// `Symbol.replace`
    Replace,
    /// `Symbol.search`
    Search,
    /// `Symbol.species`
    Species,
    /// `Symbol.split`
    Split,
    /// `Symbol.toPrimitive`
    ToPrimitive,
    /// `Symbol.toStringTag`
    ToStringTag,
    /// `Symbol.unscopables`
    Unscopables,
}

impl WellKnownSymbol {
    /// Every well-known symbol.
    pub const ALL: [WellKnownSymbol; 13] = [
        WellKnownSymbol::AsyncIterator,
        WellKnownSymbol::HasInstance,
        WellKnownSymbol::IsConcatSpreadable,
        WellKnownSymbol::Iterator,
        WellKnownSymbol::Match,
        WellKnownSymbol::MatchAll,
        WellKnownSymbol::Replace,
        WellKnownSymbol::Search,
        WellKnownSymbol::Species,
        WellKnownSymbol::Split,
        WellKnownSymbol::ToPrimitive,
        WellKnownSymbol::ToStringTag,
        WellKnownSymbol::Unscopables,
    ];

    /// The property name under `Symbol`, e.g. `"iterator"`.
    pub const fn name(self) -> &'static str {
        match self {
            WellKnownSymbol::AsyncIterator => "asyncIterator",
            WellKnownSymbol::HasInstance => "hasInstance",
            WellKnownSymbol::IsConcatSpreadable => "isConcatSpreadable",
            WellKnownSymbol::Iterator => "iterator",
            WellKnownSymbol::Match => "match",
            WellKnownSymbol::MatchAll => "matchAll",
            WellKnownSymbol::Replace => "replace",
            WellKnownSymbol::Search => "search",
            WellKnownSymbol::Species => "species",
            WellKnownSymbol::Split => "split",
            WellKnownSymbol::ToPrimitive => "toPrimitive",
            WellKnownSymbol::ToStringTag => "toStringTag",
            WellKnownSymbol::Unscopables => "unscopables",
        }
    }

    /// Looks a well-known symbol up by its property name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|wk| wk.name() == name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Origin {
    Unique,
    Registered,
    WellKnown(WellKnownSymbol),
}

#[derive(Debug)]
struct SymbolInner {
    description: Option<String>,
    origin: Origin,
}

/// A symbol.
///
/// Well-known symbols compare equal by which well-known symbol they are; every
/// other symbol is equal only to its own clones.
#[derive(Clone)]
pub struct VSymbol(Rc<SymbolInner>);

thread_local! {
    static REGISTRY: RefCell<HashMap<String, VSymbol>> = RefCell::new(HashMap::new());
}

impl VSymbol {
    /// Creates a fresh, unique symbol.
    pub fn new(description: Option<&str>) -> Self {
        VSymbol(Rc::new(SymbolInner {
            description: description.map(Into::into),
            origin: Origin::Unique,
        }))
    }

    /// Returns the symbol interned under `key` in the global registry,
    /// creating it on first use.
    pub fn for_key(key: &str) -> Self {
        REGISTRY.with_borrow_mut(|registry| {
            registry
                .entry(key.into())
                .or_insert_with(|| {
                    VSymbol(Rc::new(SymbolInner {
                        description: Some(key.into()),
                        origin: Origin::Registered,
                    }))
                })
                .clone()
        })
    }

    /// The registry key of an interned symbol; `None` for every other symbol.
    pub fn key_for(symbol: &VSymbol) -> Option<&str> {
        match symbol.0.origin {
            Origin::Registered => symbol.description(),
            _ => None,
        }
    }

    /// Returns the given well-known symbol.
    pub fn well_known(which: WellKnownSymbol) -> Self {
        VSymbol(Rc::new(SymbolInner {
            description: Some(format!("Symbol.{}", which.name())),
            origin: Origin::WellKnown(which),
        }))
    }

    /// `Symbol.iterator`
    pub fn iterator() -> Self {
        Self::well_known(WellKnownSymbol::Iterator)
    }

    /// The human-readable description, if any.
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Which well-known symbol this is, if any.
    pub fn as_well_known(&self) -> Option<WellKnownSymbol> {
        match self.0.origin {
            Origin::WellKnown(which) => Some(which),
            _ => None,
        }
    }

    /// Whether this symbol came from [`VSymbol::for_key`].
    pub fn is_registered(&self) -> bool {
        self.0.origin == Origin::Registered
    }

    /// The identity of this symbol's allocation.
    pub fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl PartialEq for VSymbol {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.origin, other.0.origin) {
            (Origin::WellKnown(a), Origin::WellKnown(b)) => a == b,
            _ => Rc::ptr_eq(&self.0, &other.0),
        }
    }
}

impl Eq for VSymbol {}

impl Hash for VSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0.origin {
            Origin::WellKnown(which) => which.hash(state),
            _ => self.identity().hash(state),
        }
    }
}

/// Orders symbols by description: undescribed symbols first, then described
/// ones by code point. Symbols with equal descriptions compare equal.
pub fn compare_symbols(a: &VSymbol, b: &VSymbol) -> Ordering {
    match (a.description(), b.description()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}
