//! Init command - write an example config file

use crate::config::{CONFIG_FILE_NAME, EXAMPLE_CONFIG};
use anyhow::{Context, Result};
use console::style;

pub fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!(
            "{} already exists, not overwriting",
            style(config_path.display()).cyan()
        );
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
