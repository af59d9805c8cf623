//! Output reporters for methods paragraphs
//!
//! Supports multiple output formats:
//! - `text` - Plain paragraphs framed by separator lines
//! - `json` - Machine-readable JSON with the extracted records
//! - `markdown` - One section per export

mod json;
mod markdown;
mod text;

use crate::pipeline::Outcome;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Outcome of one provenance export, labelled by where it came from
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub source: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Frame text paragraphs with separator lines
    pub separator: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { separator: true }
    }
}

/// Render reports in the given format
pub fn report(reports: &[SourceReport], format: OutputFormat, options: RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(reports, options),
        OutputFormat::Json => json::render(reports),
        OutputFormat::Markdown => markdown::render(reports),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::extract::tests::fwe_cluster_graph;
    use crate::methods::tests::terminology;
    use crate::pipeline::AnalysisContext;

    /// One export with a paragraph, one without
    pub(crate) fn test_reports() -> Vec<SourceReport> {
        let provenance = fwe_cluster_graph();
        let terms = terminology();
        let outcome = AnalysisContext::new(&provenance, &terms)
            .describe_methods()
            .expect("describe");
        vec![
            SourceReport {
                source: "spm_example.json".into(),
                outcome,
            },
            SourceReport {
                source: "empty.json".into(),
                outcome: Outcome::NoResults,
            },
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_parses_back() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_report_dispatch() {
        let reports = test_reports();
        let out = report(&reports, OutputFormat::Text, RenderOptions::default()).unwrap();
        assert!(out.contains("Group statistic was performed in SPM"));
    }
}
