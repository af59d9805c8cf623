//! Canonical phrasing for significance thresholds
//!
//! Produces clauses such as `P <= 0.05 (FWE)` or `T >= 3.10`, together with
//! the multiple-comparison clause used by the methods paragraph.

use crate::error::{ReportError, ReportResult};
use crate::graph::GraphQuery;
use crate::labels::TermLabels;
use crate::models::ThresholdPhrase;
use crate::vocab;

const MULTIPLE_COMPARISONS: &str = "with correction for multiple comparisons ";

/// Recognized threshold kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    /// False discovery rate q-value
    FdrQValue,
    /// Family-wise error rate corrected p-value
    FwerPValue,
    UncorrectedPValue,
    /// Threshold on the statistic value itself
    Statistic,
}

impl ThresholdKind {
    /// Kind denoted by a threshold type IRI, if recognized
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            vocab::Q_VALUE_FDR => Some(Self::FdrQValue),
            vocab::P_VALUE_FWER => Some(Self::FwerPValue),
            vocab::P_VALUE_UNCORRECTED => Some(Self::UncorrectedPValue),
            vocab::STATISTIC => Some(Self::Statistic),
            _ => None,
        }
    }

    /// Like [`from_iri`](Self::from_iri) but an unknown type is an error
    pub fn classify(iri: &str) -> ReportResult<Self> {
        Self::from_iri(iri).ok_or_else(|| ReportError::UnsupportedThresholdType {
            term: iri.to_string(),
        })
    }

    /// Corrected for multiple comparisons (FDR or FWER)
    pub fn is_corrected(self) -> bool {
        matches!(self, Self::FdrQValue | Self::FwerPValue)
    }

    pub fn is_p_value(self) -> bool {
        !matches!(self, Self::Statistic)
    }
}

/// Whether `threshold_type` denotes a corrected (FDR/FWER) threshold.
/// Unrecognized types count as uncorrected.
pub fn is_corrected(threshold_type: &str) -> bool {
    ThresholdKind::from_iri(threshold_type).is_some_and(ThresholdKind::is_corrected)
}

/// Describe a threshold of type `threshold_type` at `value`.
///
/// `statistic_type` is only consulted for statistic thresholds, whose
/// comparator is the statistic's abbreviated label (`T-statistic` -> `T`).
/// The value always renders with two decimals, so `0.001` becomes `0.00`.
pub fn describe<G: GraphQuery + ?Sized>(
    labels: &TermLabels<'_, G>,
    threshold_type: &str,
    value: f64,
    statistic_type: &str,
) -> ReportResult<ThresholdPhrase> {
    let kind = ThresholdKind::classify(threshold_type)?;

    let comparator = match kind {
        ThresholdKind::FdrQValue => "Q <= ".to_string(),
        ThresholdKind::FwerPValue | ThresholdKind::UncorrectedPValue => "P <= ".to_string(),
        ThresholdKind::Statistic => {
            let abbreviation = labels.label(statistic_type)?.replace("-statistic", "");
            format!("{abbreviation} >= ")
        }
    };

    let mut clause = format!("{comparator}{value:.2}");
    if kind.is_p_value() {
        let suffix = labels.label(threshold_type)?.replace(" p-value", "");
        clause.push_str(&format!(" ({suffix})"));
    }

    let correction = if kind.is_corrected() {
        MULTIPLE_COMPARISONS.to_string()
    } else {
        String::new()
    };

    Ok(ThresholdPhrase { clause, correction })
}
