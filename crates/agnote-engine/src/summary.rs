use agnote_providers::ToolMapper;
use agnote_types::{Event, SessionSummary, ToolSummary};

use crate::activity::summarize_activities;
use crate::aggregate::aggregate_tool_usage;
use crate::classify::classify_session;
use crate::topics::extract_topics;

pub fn summarize(events: &[Event], mapper: &dyn ToolMapper) -> SessionSummary {
    if events.is_empty() {
        return SessionSummary::empty();
    }

    let user_messages = events.iter().filter(|e| e.is_user()).count();
    let assistant_messages = events.iter().filter(|e| e.is_assistant()).count();

    let report = aggregate_tool_usage(events, mapper);
    let session_type = classify_session(&report);

    let mut timestamps = events
        .iter()
        .filter_map(|e| e.timestamp.as_deref())
        .filter(|ts| !ts.is_empty());
    let first_timestamp = timestamps.next().map(str::to_string);
    let last_timestamp = timestamps
        .next_back()
        .map(str::to_string)
        .or_else(|| first_timestamp.clone());

    let summary = SessionSummary {
        message_count: events.len(),
        user_messages,
        assistant_messages,
        session_type,
        activities: summarize_activities(&report),
        user_topics: extract_topics(events),
        tool_summary: ToolSummary {
            total_tool_calls: report.total_calls(),
            tools_used: report.tools_used(),
            files_created: report.files_written.len(),
            files_modified: report.files_edited.len(),
        },
        first_timestamp,
        last_timestamp,
    };

    tracing::debug!(
        messages = summary.message_count,
        session_type = %summary.session_type,
        "summarized session"
    );
    summary
}
