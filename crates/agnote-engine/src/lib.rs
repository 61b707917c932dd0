// Engine module - transcript analysis (tool statistics, classification, topics, export)
// This layer sits between decoded events (types/providers) and the CLI

pub mod activity;
pub mod aggregate;
pub mod annotate;
pub mod classify;
pub mod error;
pub mod export;
pub mod summary;
pub mod topics;
mod text;

pub use activity::{summarize_activities, summarize_activities_with_home};
pub use aggregate::{ToolUsageAggregator, aggregate_tool_usage};
pub use annotate::annotate;
pub use classify::classify_session;
pub use error::{Error, Result};
pub use export::{render_at, render_markdown, write_document};
pub use topics::extract_topics;

use agnote_providers::{ClaudeParser, ClaudeToolMapper, SessionParser, filter_since};
use agnote_types::{Event, SessionSummary};
use std::path::Path;

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Read a transcript and keep events at or after `since` (all events when `None`)
pub fn load_session(path: &Path, since: Option<&str>) -> Result<Vec<Event>> {
    let events = ClaudeParser.parse_file(path)?;
    Ok(match since {
        Some(bound) => filter_since(events, bound),
        None => events,
    })
}

/// Summarize a session using the Claude tool vocabulary
pub fn summarize_session(events: &[Event]) -> SessionSummary {
    summary::summarize(events, &ClaudeToolMapper)
}

/// Render the transcript and write it to `dest`
pub fn export_markdown(events: &[Event], summary: &SessionSummary, dest: &Path) -> Result<()> {
    let document = render_markdown(events, Some(summary));
    write_document(dest, &document)
}
