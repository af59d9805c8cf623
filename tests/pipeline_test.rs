//! Library-level tests over the fixture exports
//!
//! Loads the JSON triple documents in tests/fixtures and checks the
//! extracted records and rendered paragraphs end to end.

use nidm_report::graph::{load_document, TripleStore};
use nidm_report::pipeline::{AnalysisContext, Outcome};
use nidm_report::{extract, InferenceStyle, ReportError};
use std::path::PathBuf;

fn fixture(name: &str) -> TripleStore {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    load_document(&path).expect("load fixture")
}

#[test]
fn test_spm_cluster_wise_paragraph() {
    let provenance = fixture("spm_fwe_cluster.json");
    let terms = fixture("nidm-terms.json");

    let outcome = AnalysisContext::new(&provenance, &terms)
        .describe_methods()
        .expect("describe");
    let paragraphs = outcome.paragraphs();
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].style, InferenceStyle::ClusterWise);
    assert_eq!(
        paragraphs[0].text,
        "Group statistic was performed in SPM (version 12.6906). \
         Ordinary least squares estimation was performed assuming equal variances. \
         Cluster-wise inference was performed with correction for multiple comparisons \
         using a threshold P <= 0.05 (FWE) with a cluster defining threshold P <= 0.00 (uncorrected). \
         The search volume was 1871 cm^3 (69306 voxels)."
    );
}

#[test]
fn test_fsl_voxel_wise_paragraph() {
    let provenance = fixture("fsl_voxelwise.json");
    let terms = fixture("nidm-terms.json");

    let outcome = AnalysisContext::new(&provenance, &terms)
        .describe_methods()
        .expect("describe");
    let paragraphs = outcome.paragraphs();
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].style, InferenceStyle::VoxelWise);
    assert_eq!(paragraphs[0].record.excursion_set, "_:excursion_set");
    assert_eq!(
        paragraphs[0].text,
        "Group statistic was performed in FSL (version 5.0.8). \
         Weighted least squares estimation was performed assuming unequal variances. \
         Voxel-wise inference was performed using a threshold F >= 2.30 \
         and clusters smaller than 0 were discarded. \
         The search volume was 362 cm^3 (45359 voxels)."
    );
}

#[test]
fn test_no_inference_is_no_results() {
    let provenance = fixture("no_inference.json");
    let terms = fixture("nidm-terms.json");
    let outcome = AnalysisContext::new(&provenance, &terms)
        .describe_methods()
        .expect("describe");
    assert_eq!(outcome, Outcome::NoResults);
}

#[test]
fn test_extraction_is_idempotent() {
    let provenance = fixture("spm_fwe_cluster.json");
    let first = extract(&provenance);
    let second = extract(&provenance);
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[test]
fn test_every_field_comes_from_the_graph() {
    let provenance = fixture("spm_fwe_cluster.json");
    let record = extract(&provenance).remove(0);
    assert_eq!(record.estimation_method, "http://purl.obolibrary.org/obo/STATO_0000370");
    assert!(record.variance_homogeneous);
    assert_eq!(record.contrast_name, "passive listening > rest");
    assert_eq!(record.statistic_type, "http://purl.obolibrary.org/obo/STATO_0000176");
    assert_eq!(record.search_volume_voxels, 69306);
    assert_eq!(record.search_volume_units, 1871262.0);
    assert_eq!(record.extent_threshold.value, 0.05);
    assert_eq!(record.height_threshold.value, 0.001);
    assert_eq!(record.software, "http://scicrunch.org/resolver/SCR_007037");
    assert_eq!(record.software_version, "12.6906");
    assert_eq!(record.excursion_set, "http://iri.nidash.org/excursion_set_map_id");
}

#[test]
fn test_terminology_mismatch_is_an_error() {
    let provenance = fixture("spm_fwe_cluster.json");
    let terms = TripleStore::builder().build();
    let err = AnalysisContext::new(&provenance, &terms)
        .describe_methods()
        .unwrap_err();
    assert!(matches!(err, ReportError::UnresolvedTerm { .. }));
}
