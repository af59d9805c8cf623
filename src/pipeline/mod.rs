//! Per-export analysis: extract inference records, render each one

use crate::error::ReportResult;
use crate::extract::extract;
use crate::graph::GraphQuery;
use crate::methods;
use crate::models::{InferenceRecord, InferenceStyle};
use serde::Serialize;
use tracing::debug;

/// Sentinel printed when an export yields no inference record
pub const NO_RESULTS: &str = "Query returned no results.";

/// The two graphs one analysis reads from
pub struct AnalysisContext<'a, P: GraphQuery + ?Sized, T: GraphQuery + ?Sized> {
    pub provenance: &'a P,
    pub terminology: &'a T,
}

/// A rendered paragraph with the record it was rendered from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodsParagraph {
    pub style: InferenceStyle,
    #[serde(rename = "paragraph")]
    pub text: String,
    pub record: InferenceRecord,
}

/// Result of describing one export
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NoResults,
    Paragraphs(Vec<MethodsParagraph>),
}

impl Outcome {
    pub fn paragraphs(&self) -> &[MethodsParagraph] {
        match self {
            Outcome::NoResults => &[],
            Outcome::Paragraphs(paragraphs) => paragraphs,
        }
    }
}

impl<'a, P: GraphQuery + ?Sized, T: GraphQuery + ?Sized> AnalysisContext<'a, P, T> {
    pub fn new(provenance: &'a P, terminology: &'a T) -> Self {
        Self {
            provenance,
            terminology,
        }
    }

    /// Extract every inference record and render one paragraph per record.
    /// The first rendering failure is returned; no partial paragraph is kept.
    pub fn describe_methods(&self) -> ReportResult<Outcome> {
        let records = extract(self.provenance);
        if records.is_empty() {
            debug!("No inference records found");
            return Ok(Outcome::NoResults);
        }

        let paragraphs = records
            .into_iter()
            .map(|record| {
                let text = methods::render(&record, self.terminology)?;
                Ok(MethodsParagraph {
                    style: methods::inference_style(&record),
                    text,
                    record,
                })
            })
            .collect::<ReportResult<Vec<_>>>()?;

        Ok(Outcome::Paragraphs(paragraphs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::extract::tests::fwe_cluster_graph;
    use crate::graph::TripleStore;
    use crate::methods::tests::terminology;

    #[test]
    fn test_describe_methods() {
        let provenance = fwe_cluster_graph();
        let terms = terminology();
        let outcome = AnalysisContext::new(&provenance, &terms)
            .describe_methods()
            .unwrap();
        let paragraphs = outcome.paragraphs();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].style, InferenceStyle::ClusterWise);
        assert!(paragraphs[0].text.contains("with a cluster defining threshold"));
    }

    #[test]
    fn test_empty_provenance_is_no_results() {
        let provenance = TripleStore::builder().build();
        let terms = terminology();
        let outcome = AnalysisContext::new(&provenance, &terms)
            .describe_methods()
            .unwrap();
        assert_eq!(outcome, Outcome::NoResults);
        assert!(outcome.paragraphs().is_empty());
    }

    #[test]
    fn test_missing_labels_propagate() {
        let provenance = fwe_cluster_graph();
        let empty_terms = TripleStore::builder().build();
        let err = AnalysisContext::new(&provenance, &empty_terms)
            .describe_methods()
            .unwrap_err();
        assert!(matches!(err, ReportError::UnresolvedTerm { .. }));
    }
}
