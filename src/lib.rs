//! nidm-report - methods paragraphs from NIDM-Results provenance graphs
//!
//! Extracts how group statistics were computed (estimation method, variance
//! assumption, search volume, voxel-wise or cluster-wise thresholds, software)
//! from a NIDM-Results export and phrases it as a methods paragraph.
//!
//! ```rust,ignore
//! use nidm_report::graph::load_document;
//! use nidm_report::pipeline::{AnalysisContext, Outcome};
//!
//! let provenance = load_document("spm_export.json".as_ref())?;
//! let terminology = load_document("nidm-results_110.json".as_ref())?;
//! match AnalysisContext::new(&provenance, &terminology).describe_methods()? {
//!     Outcome::NoResults => println!("Query returned no results."),
//!     Outcome::Paragraphs(paragraphs) => {
//!         for p in paragraphs {
//!             println!("{}", p.text);
//!         }
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod labels;
pub mod methods;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod threshold;
pub mod vocab;

pub use error::{GraphError, ReportError};
pub use extract::extract;
pub use labels::TermLabels;
pub use methods::render;
pub use models::{InferenceRecord, InferenceStyle, Threshold, ThresholdPhrase};
pub use pipeline::{AnalysisContext, MethodsParagraph, Outcome, NO_RESULTS};
pub use threshold::{describe, ThresholdKind};
