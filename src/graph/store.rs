//! In-memory triple store
//!
//! Built once through [`TripleStoreBuilder`], then frozen: the interner
//! becomes read-only and the subject/predicate and predicate/object indexes
//! are fixed for the lifetime of the store.

use super::interner::{ReadOnlyInterner, StringInterner};
use super::store_models::{LiteralValue, Term};
use super::traits::GraphQuery;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Accumulates triples before freezing them into a [`TripleStore`]
#[derive(Debug, Default)]
pub struct TripleStoreBuilder {
    interner: StringInterner,
    seen: FxHashSet<(Term, Term, Term)>,
    triples: Vec<(Term, Term, Term)>,
}

impl TripleStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iri(&mut self, iri: &str) -> Term {
        Term::iri(self.interner.intern(iri))
    }

    pub fn blank(&mut self, label: &str) -> Term {
        Term::blank(self.interner.intern(label))
    }

    pub fn literal(&mut self, literal: &LiteralValue) -> Term {
        let value = self.interner.intern(&literal.value);
        let datatype = literal.datatype.as_deref().map(|d| self.interner.intern(d));
        let lang = literal.lang.as_deref().map(|l| self.interner.intern(l));
        Term::literal(value, datatype, lang)
    }

    /// Insert a triple. Returns false if it was already present.
    pub fn insert(&mut self, subject: Term, predicate: Term, object: Term) -> bool {
        let triple = (subject, predicate, object);
        if !self.seen.insert(triple) {
            return false;
        }
        self.triples.push(triple);
        true
    }

    /// Insert a triple whose three positions are IRIs
    pub fn add(&mut self, subject: &str, predicate: &str, object: &str) -> &mut Self {
        let (s, p, o) = (self.iri(subject), self.iri(predicate), self.iri(object));
        self.insert(s, p, o);
        self
    }

    /// Insert a triple with a literal object
    pub fn add_literal(&mut self, subject: &str, predicate: &str, object: LiteralValue) -> &mut Self {
        let (s, p) = (self.iri(subject), self.iri(predicate));
        let o = self.literal(&object);
        self.insert(s, p, o);
        self
    }

    /// Freeze into a queryable store
    pub fn build(self) -> TripleStore {
        let mut spo: FxHashMap<(Term, Term), Vec<Term>> = FxHashMap::default();
        let mut pos: FxHashMap<(Term, Term), Vec<Term>> = FxHashMap::default();

        for &(s, p, o) in &self.triples {
            spo.entry((s, p)).or_default().push(o);
            pos.entry((p, o)).or_default().push(s);
        }

        debug!(
            "Built triple store: {} triples, {} strings",
            self.triples.len(),
            self.interner.len()
        );

        TripleStore {
            interner: self.interner.freeze(),
            spo,
            pos,
            len: self.triples.len(),
        }
    }
}

/// Immutable, indexed triple set
#[derive(Debug)]
pub struct TripleStore {
    interner: ReadOnlyInterner,
    spo: FxHashMap<(Term, Term), Vec<Term>>,
    pos: FxHashMap<(Term, Term), Vec<Term>>,
    len: usize,
}

impl TripleStore {
    pub fn builder() -> TripleStoreBuilder {
        TripleStoreBuilder::new()
    }

    /// All triples, in no particular order
    pub fn triples(&self) -> impl Iterator<Item = (Term, Term, Term)> + '_ {
        self.spo
            .iter()
            .flat_map(|(&(s, p), objects)| objects.iter().map(move |&o| (s, p, o)))
    }
}

impl GraphQuery for TripleStore {
    fn iri(&self, iri: &str) -> Option<Term> {
        self.interner.get(iri).map(Term::iri)
    }

    fn objects(&self, subject: Term, predicate: Term) -> &[Term] {
        self.spo
            .get(&(subject, predicate))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn subjects(&self, predicate: Term, object: Term) -> &[Term] {
        self.pos
            .get(&(predicate, object))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn lexical(&self, term: Term) -> &str {
        self.interner.resolve(term.value)
    }

    fn datatype(&self, term: Term) -> Option<&str> {
        term.datatype.map(|key| self.interner.resolve(key))
    }

    fn len(&self) -> usize {
        self.len
    }
}
