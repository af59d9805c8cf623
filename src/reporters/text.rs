//! Plain text reporter

use super::{RenderOptions, SourceReport};
use crate::pipeline::{Outcome, NO_RESULTS};
use anyhow::Result;

const SEPARATOR: &str = "-------------------";

/// Render reports as plain text, one paragraph per inference record
pub fn render(reports: &[SourceReport], options: RenderOptions) -> Result<String> {
    let mut out = String::new();

    for report in reports {
        match &report.outcome {
            Outcome::NoResults => {
                out.push_str(NO_RESULTS);
                out.push('\n');
            }
            Outcome::Paragraphs(paragraphs) => {
                for paragraph in paragraphs {
                    if options.separator {
                        out.push_str(SEPARATOR);
                        out.push('\n');
                    }
                    out.push_str(&paragraph.text);
                    out.push('\n');
                    if options.separator {
                        out.push_str(SEPARATOR);
                        out.push('\n');
                    }
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_reports;

    #[test]
    fn test_text_render() {
        let out = render(&test_reports(), RenderOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], SEPARATOR);
        assert!(lines[1].starts_with("Group statistic was performed in SPM (version 12.6906)."));
        assert_eq!(lines[2], SEPARATOR);
        assert_eq!(lines[3], NO_RESULTS);
    }

    #[test]
    fn test_text_without_separator() {
        let out = render(&test_reports(), RenderOptions { separator: false }).unwrap();
        assert!(!out.contains(SEPARATOR));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_only_sentinel_when_empty() {
        let reports = vec![SourceReport {
            source: "x".into(),
            outcome: Outcome::NoResults,
        }];
        let out = render(&reports, RenderOptions::default()).unwrap();
        assert_eq!(out, "Query returned no results.\n");
    }
}
