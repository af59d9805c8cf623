//! Records command - dump extracted inference records

use crate::extract::extract;
use crate::graph::load_document;
use crate::pipeline::NO_RESULTS;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

pub fn run(input: &Path) -> Result<()> {
    let provenance = load_document(input)
        .with_context(|| format!("Failed to load provenance graph {}", input.display()))?;

    let records = extract(&provenance);
    if records.is_empty() {
        eprintln!("{}", style(NO_RESULTS).yellow());
    }

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
