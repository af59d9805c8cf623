//! Methods paragraph synthesis
//!
//! Turns one [`InferenceRecord`] into the group-statistics paragraph of a
//! methods section, e.g.:
//!
//! > Group statistic was performed in SPM (version 12.6906). Ordinary least
//! > squares estimation was performed assuming equal variances. Cluster-wise
//! > inference was performed with correction for multiple comparisons using a
//! > threshold P <= 0.05 (FWE) with a cluster defining threshold
//! > P <= 0.00 (uncorrected). The search volume was 1528 cm^3 (191169 voxels).

use crate::error::ReportResult;
use crate::graph::GraphQuery;
use crate::labels::TermLabels;
use crate::models::{InferenceRecord, InferenceStyle};
use crate::threshold;

/// Inference style implied by a record's extent threshold type
pub fn inference_style(record: &InferenceRecord) -> InferenceStyle {
    if threshold::is_corrected(&record.extent_threshold.threshold_type) {
        InferenceStyle::ClusterWise
    } else {
        InferenceStyle::VoxelWise
    }
}

/// Render the methods paragraph for `record`, resolving labels from the
/// `terminology` graph. Any unresolvable term aborts the whole paragraph.
pub fn render<G: GraphQuery + ?Sized>(record: &InferenceRecord, terminology: &G) -> ReportResult<String> {
    let labels = TermLabels::new(terminology);
    let style = inference_style(record);

    let (threshold, correction) = match style {
        InferenceStyle::ClusterWise => {
            let extent = &record.extent_threshold;
            let height = &record.height_threshold;
            let main = threshold::describe(
                &labels,
                &extent.threshold_type,
                extent.value,
                &record.statistic_type,
            )?;
            let cluster_defining = threshold::describe(
                &labels,
                &height.threshold_type,
                height.value,
                &record.statistic_type,
            )?;
            (
                format!(
                    "{} with a cluster defining threshold {}",
                    main.clause, cluster_defining.clause
                ),
                main.correction,
            )
        }
        InferenceStyle::VoxelWise => {
            let height = &record.height_threshold;
            let main = threshold::describe(
                &labels,
                &height.threshold_type,
                height.value,
                &record.statistic_type,
            )?;
            (
                format!(
                    "{} and clusters smaller than {} were discarded",
                    main.clause,
                    record.extent_threshold.value.trunc() as i64
                ),
                main.correction,
            )
        }
    };

    let variance = if record.variance_homogeneous {
        "equal"
    } else {
        "unequal"
    };

    let software = labels.label(&record.software)?;
    let estimation = capitalize_first(labels.label(&record.estimation_method)?);
    let search_volume_cm3 = (record.search_volume_units / 1000.0).trunc() as i64;

    Ok(format!(
        "Group statistic was performed in {software} (version {version}). \
         {estimation} was performed assuming {variance} variances. \
         {style} inference was performed {correction}using a threshold {threshold}. \
         The search volume was {search_volume_cm3} cm^3 ({voxels} voxels).",
        version = record.software_version,
        voxels = record.search_volume_voxels,
    ))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::extract::tests::{fwe_cluster_graph, voxelwise_graph, OLS, SPM_SOFTWARE, T_STATISTIC};
    use crate::extract::extract;
    use crate::graph::{LiteralValue, TripleStore};
    use crate::models::Threshold;
    use crate::vocab;

    pub(crate) fn terminology() -> TripleStore {
        let mut builder = TripleStore::builder();
        for (term, label) in [
            (vocab::P_VALUE_FWER, "FWE p-value"),
            (vocab::Q_VALUE_FDR, "FDR p-value"),
            (vocab::P_VALUE_UNCORRECTED, "uncorrected p-value"),
            (vocab::STATISTIC, "statistic"),
            (T_STATISTIC, "T-statistic"),
            (OLS, "ordinary least squares estimation"),
            (SPM_SOFTWARE, "SPM"),
        ] {
            builder.add_literal(term, vocab::RDFS_LABEL, LiteralValue::plain(label));
        }
        builder.build()
    }

    fn record(extent: Threshold, height: Threshold) -> InferenceRecord {
        InferenceRecord {
            estimation_method: OLS.to_string(),
            variance_homogeneous: false,
            contrast_name: "motor".to_string(),
            statistic_type: T_STATISTIC.to_string(),
            search_volume_voxels: 228483,
            search_volume_units: 1827864.0,
            extent_threshold: extent,
            height_threshold: height,
            software: SPM_SOFTWARE.to_string(),
            software_version: "12.12.1".to_string(),
            excursion_set: "niiri:excursion_set".to_string(),
        }
    }

    fn threshold(threshold_type: &str, value: f64) -> Threshold {
        Threshold {
            threshold_type: threshold_type.to_string(),
            value,
        }
    }

    #[test]
    fn test_cluster_wise_paragraph() {
        let provenance = fwe_cluster_graph();
        let records = extract(&provenance);
        let text = render(&records[0], &terminology()).unwrap();
        assert_eq!(
            text,
            "Group statistic was performed in SPM (version 12.6906). \
             Ordinary least squares estimation was performed assuming equal variances. \
             Cluster-wise inference was performed with correction for multiple comparisons \
             using a threshold P <= 0.05 (FWE) with a cluster defining threshold \
             P <= 0.00 (uncorrected). The search volume was 1528 cm^3 (191169 voxels)."
        );
    }

    #[test]
    fn test_voxel_wise_paragraph() {
        let provenance = voxelwise_graph();
        let records = extract(&provenance);
        let text = render(&records[0], &terminology()).unwrap();
        assert!(text.contains("Voxel-wise inference was performed with correction for multiple comparisons using a threshold P <= 0.05 (FWE) and clusters smaller than 10 were discarded."));
        assert_eq!(inference_style(&records[0]), InferenceStyle::VoxelWise);
    }

    #[test]
    fn test_uncorrected_extent_is_voxel_wise() {
        let r = record(
            threshold(vocab::P_VALUE_UNCORRECTED, 0.0),
            threshold(vocab::STATISTIC, 3.1),
        );
        let text = render(&r, &terminology()).unwrap();
        assert!(text.contains("Voxel-wise inference was performed using a threshold T >= 3.10 and clusters smaller than 0 were discarded."));
        assert!(text.contains("assuming unequal variances"));
    }

    #[test]
    fn test_fdr_cluster_with_statistic_cdt() {
        let r = record(threshold(vocab::Q_VALUE_FDR, 0.05), threshold(vocab::STATISTIC, 2.3));
        let text = render(&r, &terminology()).unwrap();
        assert_eq!(inference_style(&r), InferenceStyle::ClusterWise);
        assert!(text.contains("using a threshold Q <= 0.05 (FDR) with a cluster defining threshold T >= 2.30."));
        assert!(text.contains("The search volume was 1827 cm^3 (228483 voxels)."));
    }

    #[test]
    fn test_extent_value_is_truncated() {
        let r = record(threshold(vocab::STATISTIC, 12.9), threshold(vocab::P_VALUE_FWER, 0.05));
        let text = render(&r, &terminology()).unwrap();
        assert!(text.contains("clusters smaller than 12 were discarded"));
    }

    #[test]
    fn test_unresolved_software_fails() {
        let mut r = record(threshold(vocab::P_VALUE_FWER, 0.05), threshold(vocab::P_VALUE_UNCORRECTED, 0.001));
        r.software = "http://example.org/UnknownSoftware".to_string();
        assert_eq!(
            render(&r, &terminology()),
            Err(ReportError::UnresolvedTerm {
                term: "http://example.org/UnknownSoftware".to_string()
            })
        );
    }

    #[test]
    fn test_unsupported_height_type_fails() {
        let r = record(
            threshold(vocab::P_VALUE_UNCORRECTED, 0.0),
            threshold("http://example.org/SomethingElse", 1.0),
        );
        assert!(matches!(
            render(&r, &terminology()),
            Err(ReportError::UnsupportedThresholdType { .. })
        ));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("weighted least squares"), "Weighted least squares");
        assert_eq!(capitalize_first("OLS"), "OLS");
        assert_eq!(capitalize_first(""), "");
    }
}
