//! Configuration module for nidm-report
//!
//! Looks for `nidm-report.toml` in the working directory, then
//! `~/.config/nidm-report/config.toml`. Command-line flags override both.

mod report_config;

pub use report_config::{
    load_config, user_config_path, OutputConfig, ReportConfig, TerminologyConfig, CONFIG_FILE_NAME,
    EXAMPLE_CONFIG,
};
