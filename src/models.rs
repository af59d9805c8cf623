//! Core data models
//!
//! Records extracted from a provenance graph hold plain strings and numbers
//! so they outlive the graph they were read from and can be serialized.

use serde::{Deserialize, Serialize};

/// A threshold as declared by the export: its concrete type and value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// IRI of the threshold kind (e.g. `obo:OBI_0001265` for FWER p-value)
    pub threshold_type: String,
    pub value: f64,
}

/// One statistical inference event, joined across the provenance graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRecord {
    /// IRI of the parameter estimation method
    pub estimation_method: String,
    pub variance_homogeneous: bool,
    pub contrast_name: String,
    /// IRI of the statistic type (T, F, Z...)
    pub statistic_type: String,
    pub search_volume_voxels: i64,
    /// Search volume in physical units (mm^3)
    pub search_volume_units: f64,
    pub extent_threshold: Threshold,
    pub height_threshold: Threshold,
    /// IRI of the concrete software agent type
    pub software: String,
    pub software_version: String,
    pub excursion_set: String,
}

/// Inference style, decided from the extent threshold's type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InferenceStyle {
    #[serde(rename = "voxel-wise")]
    VoxelWise,
    #[serde(rename = "cluster-wise")]
    ClusterWise,
}

impl std::fmt::Display for InferenceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceStyle::VoxelWise => write!(f, "Voxel-wise"),
            InferenceStyle::ClusterWise => write!(f, "Cluster-wise"),
        }
    }
}

/// Threshold clause plus its multiple-comparison clause (possibly empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdPhrase {
    pub clause: String,
    pub correction: String,
}
