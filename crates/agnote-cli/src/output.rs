use agnote_types::SessionSummary;
use serde::Serialize;
use serde_json::json;

/// Everything a successful run prints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Summary(SessionSummary),
    Exported(ExportReceipt),
}

/// Acknowledgement of a markdown export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    pub status: &'static str,
    pub output: String,
    /// Events rendered, after timestamp filtering
    pub messages: usize,
}

impl ExportReceipt {
    pub fn success(output: String, messages: usize) -> Self {
        Self {
            status: "success",
            output,
            messages,
        }
    }
}

/// Summaries are pretty-printed; receipts fit on one line.
pub fn render_report(report: &Report) -> serde_json::Result<String> {
    match report {
        Report::Summary(summary) => serde_json::to_string_pretty(summary),
        Report::Exported(receipt) => serde_json::to_string(receipt),
    }
}

/// `{"error": ...}` record: outermost context plus the root cause
pub fn render_error(err: &anyhow::Error) -> String {
    let message = if err.chain().nth(1).is_some() {
        format!("{}: {}", err, err.root_cause())
    } else {
        err.to_string()
    };
    json!({ "error": message }).to_string()
}

/// `{"error": ...}` record for a rejected command line: clap's headline only
pub fn render_usage_error(err: &clap::Error) -> String {
    let text = err.to_string();
    let headline = text.lines().next().unwrap_or_default();
    let message = headline.strip_prefix("error: ").unwrap_or(headline);
    json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use anyhow::Context;
    use clap::Parser;

    #[test]
    fn test_receipt_shape() {
        let report = Report::Exported(ExportReceipt::success("out.md".to_string(), 3));
        assert_eq!(
            render_report(&report).unwrap(),
            r#"{"status":"success","output":"out.md","messages":3}"#
        );
    }

    #[test]
    fn test_summary_is_pretty() {
        let report = Report::Summary(SessionSummary::empty());
        let text = render_report(&report).unwrap();
        assert!(text.starts_with("{\n  \"message_count\": 0,"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["session_type"], "Empty");
    }

    #[test]
    fn test_error_record_includes_context() {
        let err = Err::<(), _>(std::io::Error::other("disk full"))
            .context("Failed to export")
            .unwrap_err();
        let value: serde_json::Value = serde_json::from_str(&render_error(&err)).unwrap();
        assert_eq!(value["error"], "Failed to export: disk full");
    }

    #[test]
    fn test_plain_error_record() {
        let err = anyhow::anyhow!("No transcript path provided");
        assert_eq!(
            render_error(&err),
            r#"{"error":"No transcript path provided"}"#
        );
    }

    #[test]
    fn test_usage_error_record() {
        let err = Cli::try_parse_from(["agnote", "session.jsonl", "--bogus"]).unwrap_err();
        let value: serde_json::Value =
            serde_json::from_str(&render_usage_error(&err)).unwrap();

        let message = value["error"].as_str().unwrap();
        assert!(message.contains("--bogus"), "{message}");
        assert!(!message.starts_with("error:"), "{message}");
        assert!(!message.contains("Usage"), "{message}");
    }
}
