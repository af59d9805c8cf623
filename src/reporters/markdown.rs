//! Markdown reporter
//!
//! One `##` section per export, ready to paste into a paper draft or wiki.

use super::SourceReport;
use crate::pipeline::{Outcome, NO_RESULTS};
use anyhow::Result;

pub fn render(reports: &[SourceReport]) -> Result<String> {
    let mut md = String::from("# Group statistics\n");

    for report in reports {
        md.push_str(&format!("\n## {}\n\n", report.source));
        match &report.outcome {
            Outcome::NoResults => md.push_str(&format!("_{}_\n", NO_RESULTS)),
            Outcome::Paragraphs(paragraphs) => {
                for (i, paragraph) in paragraphs.iter().enumerate() {
                    if i > 0 {
                        md.push('\n');
                    }
                    if paragraphs.len() > 1 {
                        md.push_str(&format!(
                            "**Contrast: {}**\n\n",
                            paragraph.record.contrast_name
                        ));
                    }
                    md.push_str(&paragraph.text);
                    md.push('\n');
                }
            }
        }
    }

    Ok(md)
}
