use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agnote")]
#[command(
    about = "Summarize a Claude Code transcript or export it as a markdown note",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the session transcript (JSONL); a leading `~/` is expanded
    pub transcript: Option<String>,

    /// Only keep events whose timestamp is at or after this ISO-8601 value
    #[arg(long, value_name = "ISO")]
    pub since_timestamp: Option<String>,

    /// Write the full transcript as markdown to this path instead of printing the summary
    #[arg(long, value_name = "PATH")]
    pub export_markdown: Option<String>,

    /// Diagnostics written to stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
