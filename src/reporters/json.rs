//! JSON reporter
//!
//! One object per export with the rendered paragraphs and the records they
//! were rendered from. Useful for piping to jq or building larger reports.

use super::SourceReport;
use crate::pipeline::{Outcome, NO_RESULTS};
use anyhow::Result;
use serde_json::{json, Value};

/// Render reports as pretty-printed JSON
pub fn render(reports: &[SourceReport]) -> Result<String> {
    let entries: Vec<Value> = reports.iter().map(entry).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn entry(report: &SourceReport) -> Value {
    match &report.outcome {
        Outcome::NoResults => json!({
            "source": report.source,
            "results": [],
            "message": NO_RESULTS,
        }),
        Outcome::Paragraphs(paragraphs) => json!({
            "source": report.source,
            "results": paragraphs,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_reports;

    #[test]
    fn test_json_render_valid() {
        let out = render(&test_reports()).unwrap();
        let parsed: Value = serde_json::from_str(&out).expect("parse JSON");
        let entries = parsed.as_array().expect("array");
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first["source"], "spm_example.json");
        let result = &first["results"][0];
        assert_eq!(result["style"], "cluster-wise");
        assert_eq!(result["record"]["software_version"], "12.6906");
        assert!(result["paragraph"]
            .as_str()
            .expect("paragraph")
            .starts_with("Group statistic"));
        assert!(result.get("text").is_none());
    }

    #[test]
    fn test_json_result_keys() {
        let out = render(&test_reports()).unwrap();
        let parsed: Value = serde_json::from_str(&out).expect("parse JSON");
        let result = parsed[0]["results"][0].as_object().expect("result object");
        let mut keys: Vec<&str> = result.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["paragraph", "record", "style"]);
    }

    #[test]
    fn test_json_no_results() {
        let out = render(&test_reports()).unwrap();
        let parsed: Value = serde_json::from_str(&out).expect("parse JSON");
        let second = &parsed[1];
        assert_eq!(second["results"].as_array().expect("results").len(), 0);
        assert_eq!(second["message"], NO_RESULTS);
    }
}
