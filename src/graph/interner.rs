//! String interning for the triple store
//!
//! Provenance exports repeat the same handful of IRIs (`prov:used`,
//! `rdf:type`, class IRIs) in almost every triple. Each unique string is
//! stored once and terms carry a 4-byte key instead.

use lasso::{Rodeo, RodeoReader, Spur};

/// A string key - small (4 bytes) reference to an interned string
pub type StrKey = Spur;

/// Mutable interner used while a graph is being built
#[derive(Debug, Default)]
pub struct StringInterner {
    inner: Rodeo,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning a key
    /// If the string was already interned, returns the existing key
    #[inline]
    pub fn intern(&mut self, s: &str) -> StrKey {
        self.inner.get_or_intern(s)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Freeze into a read-only interner once building is complete
    pub fn freeze(self) -> ReadOnlyInterner {
        ReadOnlyInterner {
            inner: self.inner.into_reader(),
        }
    }
}

/// A read-only interner for when building is complete
#[derive(Debug)]
pub struct ReadOnlyInterner {
    inner: RodeoReader,
}

impl ReadOnlyInterner {
    /// Resolve a key to its string
    #[inline]
    pub fn resolve(&self, key: StrKey) -> &str {
        self.inner.resolve(&key)
    }

    /// Try to get a key for a string
    #[inline]
    pub fn get(&self, s: &str) -> Option<StrKey> {
        self.inner.get(s)
    }
}
