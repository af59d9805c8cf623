//! Label command - look up a term in the terminology graph

use crate::config::load_config;
use crate::graph::load_document;
use crate::labels::TermLabels;
use crate::vocab::expand_curie;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(term: &str, terms: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd);
    let terms_path = super::resolve_terms_path(terms, &config)?;

    let terminology = load_document(&terms_path)
        .with_context(|| format!("Failed to load terminology from {}", terms_path.display()))?;

    let iri = expand_curie(term);
    let label = TermLabels::new(&terminology).label(&iri)?;
    println!("{label}");
    Ok(())
}
