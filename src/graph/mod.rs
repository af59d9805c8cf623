//! Triple graphs for provenance exports and vocabulary terminology
//!
//! Pure in-memory store: interned terms with subject/predicate and
//! predicate/object indexes. Serialization parsing stays outside this crate;
//! graphs arrive as JSON triple documents or are built programmatically.

pub mod document;
pub mod interner;
pub mod store;
pub mod store_models;
pub mod traits;

pub use document::{load_document, parse_document, TripleDocument};
pub use store::{TripleStore, TripleStoreBuilder};
pub use store_models::{LiteralValue, Term, TermKind};
pub use traits::GraphQuery;
