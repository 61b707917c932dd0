use super::args::Cli;
use crate::output::{ExportReceipt, Report};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<Report> {
    let Some(transcript) = cli.transcript else {
        bail!("No transcript path provided");
    };

    let transcript_path = expand_tilde(&transcript);
    if !transcript_path.exists() {
        bail!("Transcript file not found: {}", transcript_path.display());
    }

    let since = cli.since_timestamp.as_deref().filter(|s| !s.is_empty());
    let events = agnote_engine::load_session(&transcript_path, since)
        .with_context(|| format!("Failed to read transcript {}", transcript_path.display()))?;
    tracing::debug!(
        path = %transcript_path.display(),
        events = events.len(),
        since = since.unwrap_or(""),
        "loaded transcript"
    );

    let summary = agnote_engine::summarize_session(&events);

    match cli.export_markdown {
        Some(dest) => {
            let dest_path = expand_tilde(&dest);
            agnote_engine::export_markdown(&events, &summary, &dest_path)
                .with_context(|| format!("Failed to export markdown to {}", dest_path.display()))?;
            Ok(Report::Exported(ExportReceipt::success(
                dest_path.display().to_string(),
                events.len(),
            )))
        }
        None => Ok(Report::Summary(summary)),
    }
}

/// Expand a leading `~/` to the current user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogLevel;

    fn cli(transcript: Option<&str>) -> Cli {
        Cli {
            transcript: transcript.map(str::to_string),
            since_timestamp: None,
            export_markdown: None,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("rel/path"), PathBuf::from("rel/path"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/notes/a.jsonl"), home.join("notes/a.jsonl"));
        }
    }

    #[test]
    fn test_missing_argument() {
        let err = run(cli(None)).unwrap_err();
        assert_eq!(err.to_string(), "No transcript path provided");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        let err = run(cli(Some(path.to_str().unwrap()))).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Transcript file not found: {}", path.display())
        );
    }

    #[test]
    fn test_summary_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.jsonl");
        std::fs::write(&path, "{\"type\":\"user\",\"message\":{\"content\":\"hi\"}}\n").unwrap();

        match run(cli(Some(path.to_str().unwrap()))).unwrap() {
            Report::Summary(summary) => assert_eq!(summary.message_count, 1),
            other => panic!("unexpected report: {:?}", other),
        }
    }
}
