//! Report configuration
//!
//! ```toml
//! # nidm-report.toml
//!
//! [terminology]
//! path = "terms/nidm-results_110.json"
//!
//! [output]
//! format = "text"
//! separator = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "nidm-report.toml";

/// Written by `nidm-report init`
pub const EXAMPLE_CONFIG: &str = r#"# nidm-report configuration

[terminology]
# JSON triple document with rdfs:label for every NIDM-Results term
# path = "nidm-results_110.json"

[output]
# text, json or markdown
format = "text"
# Frame text paragraphs with ------------------- lines
separator = true
"#;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub terminology: TerminologyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerminologyConfig {
    /// Terminology document; relative paths resolve against the config file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub separator: Option<bool>,
}

impl ReportConfig {
    pub fn format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    pub fn separator(&self) -> bool {
        self.output.separator.unwrap_or(true)
    }

    /// Make a relative terminology path relative to `base`
    fn anchor(mut self, base: &Path) -> Self {
        if let Some(path) = &self.terminology.path {
            if path.is_relative() {
                self.terminology.path = Some(base.join(path));
            }
        }
        self
    }
}

/// User config file location (`~/.config/nidm-report/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nidm-report").join("config.toml"))
}

/// Load configuration for a run started in `dir`.
///
/// `./nidm-report.toml` takes precedence over the user config. Only the first
/// file found is read; if it fails to parse, defaults are used.
pub fn load_config(dir: &Path) -> ReportConfig {
    load_config_from(dir, user_config_path())
}

fn load_config_from(dir: &Path, user_config: Option<PathBuf>) -> ReportConfig {
    let found = std::iter::once(dir.join(CONFIG_FILE_NAME))
        .chain(user_config)
        .find(|path| path.exists());

    let Some(path) = found else {
        debug!("No config found, using defaults");
        return ReportConfig::default();
    };

    match load_toml_config(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            let base = path.parent().unwrap_or(dir);
            config.anchor(base)
        }
        Err(e) => {
            warn!("Failed to load {}: {}, using defaults", path.display(), e);
            ReportConfig::default()
        }
    }
}

fn load_toml_config(path: &Path) -> anyhow::Result<ReportConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ReportConfig = toml::from_str(&content)?;
    Ok(config)
}
