//! JSON triple documents
//!
//! A plain listing of triples used to hand already-parsed graphs to the
//! reporter:
//!
//! ```json
//! {
//!   "prefixes": { "ex": "http://example.org/" },
//!   "triples": [
//!     { "subject": "niiri:inference", "predicate": "prov:used", "object": { "iri": "niiri:stat_map" } },
//!     { "subject": "niiri:stat_map", "predicate": "a", "object": { "iri": "nidm:NIDM_0000076" } },
//!     { "subject": "niiri:stat_map", "predicate": "nidm:NIDM_0000085", "object": "listening > rest" },
//!     { "subject": "niiri:height", "predicate": "prov:value", "object": { "value": "0.05", "datatype": "xsd:float" } }
//!   ]
//! }
//! ```
//!
//! String objects are plain literals, numbers become `xsd:integer` or
//! `xsd:double`, booleans `xsd:boolean`. `_:label` denotes a blank node.

use super::store::{TripleStore, TripleStoreBuilder};
use super::store_models::{LiteralValue, Term};
use super::traits::GraphQuery;
use crate::error::{GraphError, GraphResult};
use crate::vocab;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct TripleDocument {
    #[serde(default)]
    pub prefixes: HashMap<String, String>,
    pub triples: Vec<TripleRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TripleRecord {
    pub subject: String,
    pub predicate: String,
    pub object: ObjectRecord,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ObjectRecord {
    Iri {
        iri: String,
    },
    Literal {
        value: String,
        #[serde(default)]
        datatype: Option<String>,
        #[serde(default)]
        lang: Option<String>,
    },
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// Load a triple document from disk
pub fn load_document(path: &Path) -> GraphResult<TripleStore> {
    let content = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_document(&content)?;
    debug!("Loaded {} triples from {}", store.len(), path.display());
    Ok(store)
}

/// Parse a triple document from a JSON string
pub fn parse_document(json: &str) -> GraphResult<TripleStore> {
    let document: TripleDocument = serde_json::from_str(json)?;
    document.into_store()
}

impl TripleDocument {
    pub fn into_store(self) -> GraphResult<TripleStore> {
        let prefixes = PrefixTable::new(self.prefixes);
        let mut builder = TripleStore::builder();

        for (index, triple) in self.triples.iter().enumerate() {
            if triple.subject.is_empty() || triple.predicate.is_empty() {
                return Err(GraphError::EmptyTerm { index });
            }
            let subject = prefixes.node(&mut builder, &triple.subject)?;
            let predicate = if triple.predicate == "a" {
                builder.iri(vocab::RDF_TYPE)
            } else {
                let iri = prefixes.expand(&triple.predicate)?;
                builder.iri(&iri)
            };
            let object = prefixes.object(&mut builder, &triple.object)?;
            builder.insert(subject, predicate, object);
        }

        Ok(builder.build())
    }
}

struct PrefixTable {
    map: HashMap<String, String>,
}

impl PrefixTable {
    fn new(declared: HashMap<String, String>) -> Self {
        let mut map: HashMap<String, String> = vocab::BUILTIN_PREFIXES
            .iter()
            .map(|(p, ns)| (p.to_string(), ns.to_string()))
            .collect();
        map.extend(declared);
        Self { map }
    }

    /// Expand a CURIE or pass an absolute IRI through
    fn expand(&self, term: &str) -> GraphResult<String> {
        let Some((prefix, local)) = term.split_once(':') else {
            return Err(GraphError::UnknownPrefix {
                prefix: String::new(),
                term: term.to_string(),
            });
        };
        if let Some(ns) = self.map.get(prefix) {
            return Ok(format!("{ns}{local}"));
        }
        if local.starts_with("//") || prefix == "urn" {
            return Ok(term.to_string());
        }
        Err(GraphError::UnknownPrefix {
            prefix: prefix.to_string(),
            term: term.to_string(),
        })
    }

    /// Subject or IRI-object position: blank node or IRI
    fn node(&self, builder: &mut TripleStoreBuilder, term: &str) -> GraphResult<Term> {
        if let Some(label) = term.strip_prefix("_:") {
            return Ok(builder.blank(label));
        }
        let iri = self.expand(term)?;
        Ok(builder.iri(&iri))
    }

    fn object(&self, builder: &mut TripleStoreBuilder, object: &ObjectRecord) -> GraphResult<Term> {
        let literal = match object {
            ObjectRecord::Iri { iri } => return self.node(builder, iri),
            ObjectRecord::Literal {
                value,
                datatype,
                lang,
            } => LiteralValue {
                value: value.clone(),
                datatype: datatype.as_deref().map(|d| self.expand(d)).transpose()?,
                lang: lang.clone(),
            },
            ObjectRecord::Text(text) => LiteralValue::plain(text),
            ObjectRecord::Integer(n) => LiteralValue::typed(&n.to_string(), vocab::XSD_INTEGER),
            ObjectRecord::Float(x) => LiteralValue::typed(&x.to_string(), vocab::XSD_DOUBLE),
            ObjectRecord::Boolean(b) => LiteralValue::typed(&b.to_string(), vocab::XSD_BOOLEAN),
        };
        Ok(builder.literal(&literal))
    }
}
