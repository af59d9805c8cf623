//! Human-readable labels for vocabulary terms

use crate::error::{ReportError, ReportResult};
use crate::graph::GraphQuery;
use crate::vocab;

/// Resolves `rdfs:label` values from a terminology graph
pub struct TermLabels<'g, G: GraphQuery + ?Sized> {
    graph: &'g G,
}

impl<'g, G: GraphQuery + ?Sized> TermLabels<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Label of `term` (an absolute IRI). The first label loaded wins when
    /// a term carries several.
    pub fn label(&self, term: &str) -> ReportResult<&'g str> {
        let graph = self.graph;
        let unresolved = || ReportError::UnresolvedTerm {
            term: term.to_string(),
        };
        let subject = graph.iri(term).ok_or_else(unresolved)?;
        let predicate = graph.iri(vocab::RDFS_LABEL).ok_or_else(unresolved)?;
        graph
            .objects(subject, predicate)
            .iter()
            .find(|t| t.is_literal())
            .map(|&t| graph.lexical(t))
            .ok_or_else(unresolved)
    }
}
