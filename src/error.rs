//! Error types for graph loading and report rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a methods paragraph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The terminology graph has no `rdfs:label` for this term. Usually means
    /// the export and the terminology come from different vocabulary releases.
    #[error("No label found for term <{term}> in the terminology graph")]
    UnresolvedTerm { term: String },

    #[error("Unsupported threshold type <{term}>")]
    UnsupportedThresholdType { term: String },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while loading a triple document
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed triple document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown prefix '{prefix}' in '{term}'")]
    UnknownPrefix { prefix: String, term: String },

    #[error("Empty term in triple #{index}")]
    EmptyTerm { index: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
