//! Markdown transcript export.
//!
//! The whole document is built in memory first. [`write_document`] then
//! writes it next to the destination and renames it into place, so a failed
//! export never leaves a half-written note behind.

use agnote_types::{ContentItem, Event, MessageContent, SessionSummary};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;

use crate::annotate::annotate;
use crate::error::{Error, Result};

const TITLE: &str = "# Full Session Transcript\n";
const CONVERSATION_HEADING: &str = "## Conversation\n";
const RULE: &str = "---\n";
const UNKNOWN_TOOL: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    fn label(self) -> &'static str {
        match self {
            Speaker::User => "👤 User",
            Speaker::Assistant => "🤖 Claude",
        }
    }
}

/// One rendered conversation entry
#[derive(Debug, Clone, PartialEq)]
struct Turn {
    speaker: Speaker,
    time: Option<String>,
    body: String,
}

impl Turn {
    fn from_event(event: &Event) -> Option<Self> {
        let (speaker, text) = if event.is_user() {
            (Speaker::User, event.user_prompt()?.to_string())
        } else if event.is_assistant() {
            (Speaker::Assistant, assistant_text(&event.message.content))
        } else {
            return None;
        };

        if text.trim().is_empty() {
            return None;
        }

        Some(Self {
            speaker,
            time: event
                .timestamp
                .as_deref()
                .filter(|ts| !ts.is_empty())
                .map(format_time_of_day),
            body: annotate(&text),
        })
    }

    fn heading(&self) -> String {
        match &self.time {
            Some(time) => format!("### {} ({})\n", self.speaker.label(), time),
            None => format!("### {}\n", self.speaker.label()),
        }
    }
}

/// Readable text of an assistant message; tool calls become inline markers
/// and any other body shape is shown as its JSON text
fn assistant_text(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Blocks(items) => items
            .iter()
            .map(|item| match item {
                ContentItem::Text { text } => text.clone(),
                ContentItem::ToolUse { name, .. } => {
                    let name = if name.is_empty() { UNKNOWN_TOOL } else { name.as_str() };
                    format!("\n`[Tool: {}]`\n", name)
                }
                ContentItem::Unknown => String::new(),
            })
            .collect(),
        MessageContent::Other(value) => value.to_string(),
    }
}

/// `h:mm am|pm` in the timestamp's own offset; unparsable input is returned as is.
pub fn format_time_of_day(timestamp: &str) -> String {
    let Some(time) = parse_timestamp(timestamp) else {
        tracing::warn!(timestamp, "unreadable timestamp, shown verbatim");
        return timestamp.to_string();
    };

    let formatted = time.format("%I:%M %p").to_string();
    formatted.trim_start_matches('0').to_lowercase()
}

/// Wall-clock time of a timestamp, ignoring its offset
fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Render the transcript with the current local time as export time.
pub fn render_markdown(events: &[Event], summary: Option<&SessionSummary>) -> String {
    render_at(events, summary, Local::now().naive_local())
}

/// Render the transcript as of `exported_at`.
pub fn render_at(
    events: &[Event],
    summary: Option<&SessionSummary>,
    exported_at: NaiveDateTime,
) -> String {
    let mut lines: Vec<String> = vec![TITLE.to_string()];

    if let Some(summary) = summary {
        lines.push(format!("**Exported:** {}", exported_at.format("%Y-%m-%d %H:%M")));
        lines.push(format!("**Session Type:** {}", summary.session_type));
        lines.push(format!("**Messages:** {}", summary.message_count));
        lines.push(format!(
            "**Tool Calls:** {}",
            summary.tool_summary.total_tool_calls
        ));
        lines.push(String::new());
    }

    lines.push(RULE.to_string());
    lines.push(CONVERSATION_HEADING.to_string());

    for turn in events.iter().filter_map(Turn::from_event) {
        lines.push(turn.heading());
        lines.push(turn.body);
        lines.push("\n".to_string());
    }

    lines.push(RULE.to_string());
    lines.push(format!(
        "*Transcript exported at {}*\n",
        exported_at.format("%Y-%m-%dT%H:%M:%S%.6f")
    ));

    lines.join("\n")
}

/// Write `contents` to `dest` through a sibling temporary file.
///
/// The parent directory must already exist.
pub fn write_document(dest: &Path, contents: &str) -> Result<()> {
    let file_name = dest
        .file_name()
        .ok_or_else(|| Error::InvalidPath(dest.display().to_string()))?;
    let temp_path = dest.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let written = fs::write(&temp_path, contents).and_then(|()| fs::rename(&temp_path, dest));
    if let Err(err) = written {
        // A partial temp file is never left next to the destination
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    tracing::info!(path = %dest.display(), bytes = contents.len(), "exported transcript");
    Ok(())
}
