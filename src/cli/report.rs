//! Report command - render methods paragraphs for each export

use crate::config::load_config;
use crate::graph::{load_document, GraphQuery, TripleStore};
use crate::pipeline::AnalysisContext;
use crate::reporters::{self, OutputFormat, RenderOptions, SourceReport};
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(
    inputs: &[PathBuf],
    terms: Option<PathBuf>,
    format: Option<String>,
    output: Option<&Path>,
    no_separator: bool,
) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd);

    let format: OutputFormat = format.as_deref().unwrap_or(config.format()).parse()?;
    let terms_path = super::resolve_terms_path(terms, &config)?;
    let options = RenderOptions {
        separator: config.separator() && !no_separator,
    };

    // Loaded once, shared by every export of this run
    let terminology = load_document(&terms_path)
        .with_context(|| format!("Failed to load terminology from {}", terms_path.display()))?;
    info!("Loaded terminology: {} triples", terminology.len());

    let mut reports = Vec::with_capacity(inputs.len());
    let mut failure = None;

    for input in inputs {
        info!("Describing {}", input.display());
        match describe(input, &terminology) {
            Ok(report) => reports.push(report),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    // Exports completed before a failure are still written out
    if !reports.is_empty() {
        info!("Rendering {} export(s) as {format}", reports.len());
        let rendered = reporters::report(&reports, format, options)?;
        write_output(&rendered, output)?;
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn describe(input: &Path, terminology: &TripleStore) -> Result<SourceReport> {
    let provenance = load_document(input)
        .with_context(|| format!("Failed to load provenance graph {}", input.display()))?;

    let outcome = AnalysisContext::new(&provenance, terminology)
        .describe_methods()
        .with_context(|| format!("Failed to describe {}", input.display()))?;

    info!(
        "{}: {} inference record(s)",
        input.display(),
        outcome.paragraphs().len()
    );

    Ok(SourceReport {
        source: input.display().to_string(),
        outcome,
    })
}

fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
