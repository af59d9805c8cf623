//! Graph query interface used by the extractor and label resolver

use super::{Term, TermKind};

/// Pattern lookups over an immutable triple set
pub trait GraphQuery {
    /// Look up an IRI term. `None` means the graph never mentions it.
    fn iri(&self, iri: &str) -> Option<Term>;

    /// Objects of all `(subject, predicate, ?o)` triples, in load order
    fn objects(&self, subject: Term, predicate: Term) -> &[Term];

    /// Subjects of all `(?s, predicate, object)` triples, in load order
    fn subjects(&self, predicate: Term, object: Term) -> &[Term];

    /// Lexical form of a term (IRI, blank node label or literal value)
    fn lexical(&self, term: Term) -> &str;

    /// Datatype IRI of a literal, if any
    fn datatype(&self, term: Term) -> Option<&str>;

    /// Number of distinct triples
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, subject: Term, predicate: Term, object: Term) -> bool {
        self.objects(subject, predicate).contains(&object)
    }

    /// First object of `(subject, predicate, ?o)`
    fn object(&self, subject: Term, predicate: Term) -> Option<Term> {
        self.objects(subject, predicate).first().copied()
    }

    /// Term rendered as a standalone identifier: IRIs and literals by their
    /// lexical form, blank nodes as `_:label`
    fn display(&self, term: Term) -> String {
        match term.kind {
            TermKind::Blank => format!("_:{}", self.lexical(term)),
            TermKind::Iri | TermKind::Literal => self.lexical(term).to_string(),
        }
    }
}
