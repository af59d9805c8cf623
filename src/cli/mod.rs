//! CLI command definitions and handlers

mod init;
mod label;
mod records;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nidm-report - methods paragraphs from NIDM-Results exports
#[derive(Parser, Debug)]
#[command(name = "nidm-report")]
#[command(
    version,
    about = "Describe the group statistics of NIDM-Results exports as a methods paragraph",
    after_help = "\
Examples:
  nidm-report report spm.json fsl.json --terms nidm-results.json
  nidm-report report spm.json --format markdown -o methods.md
  nidm-report records spm.json            Dump the extracted inference records
  nidm-report label obo:OBI_0001265       Look up a term label
  nidm-report init                        Write an example nidm-report.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one methods paragraph per inference in each export
    Report {
        /// Provenance graphs (JSON triple documents)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Terminology graph with term labels (default: from nidm-report.toml)
        #[arg(long, short = 't', env = "NIDM_REPORT_TERMS")]
        terms: Option<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Do not frame text paragraphs with separator lines
        #[arg(long)]
        no_separator: bool,
    },

    /// Print the inference records extracted from an export as JSON
    Records {
        /// Provenance graph (JSON triple document)
        input: PathBuf,
    },

    /// Print the label of a vocabulary term
    Label {
        /// Term IRI or CURIE (e.g. obo:OBI_0001265)
        term: String,

        /// Terminology graph with term labels (default: from nidm-report.toml)
        #[arg(long, short = 't', env = "NIDM_REPORT_TERMS")]
        terms: Option<PathBuf>,
    },

    /// Write an example nidm-report.toml in the current directory
    Init,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Report {
            inputs,
            terms,
            format,
            output,
            no_separator,
        } => report::run(&inputs, terms, format, output.as_deref(), no_separator),

        Commands::Records { input } => records::run(&input),

        Commands::Label { term, terms } => label::run(&term, terms),

        Commands::Init => init::run(),
    }
}

/// Terminology path from the flag, else from the config file
fn resolve_terms_path(flag: Option<PathBuf>, config: &crate::config::ReportConfig) -> Result<PathBuf> {
    flag.or_else(|| config.terminology.path.clone()).ok_or_else(|| {
        anyhow::anyhow!(
            "No terminology graph given. Pass --terms <PATH>, set NIDM_REPORT_TERMS, \
             or set [terminology] path in {}",
            crate::config::CONFIG_FILE_NAME
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from([
            "nidm-report",
            "report",
            "a.json",
            "b.json",
            "--terms",
            "terms.json",
            "--format",
            "md",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                inputs,
                terms,
                format,
                ..
            } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(terms, Some(PathBuf::from("terms.json")));
                assert_eq!(format.as_deref(), Some("md"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_report_requires_input() {
        assert!(Cli::try_parse_from(["nidm-report", "report"]).is_err());
    }

    #[test]
    fn test_terms_flag_wins_over_config() {
        let mut config = crate::config::ReportConfig::default();
        config.terminology.path = Some(PathBuf::from("from-config.json"));
        let path = resolve_terms_path(Some(PathBuf::from("flag.json")), &config).unwrap();
        assert_eq!(path, PathBuf::from("flag.json"));
        let path = resolve_terms_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("from-config.json"));
        assert!(resolve_terms_path(None, &Default::default()).is_err());
    }
}
