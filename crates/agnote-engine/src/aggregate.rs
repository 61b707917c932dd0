use agnote_providers::ToolMapper;
use agnote_types::{
    Event, ExecuteArgs, FileArgs, SearchArgs, ToolInvocation, ToolKind, ToolUsageReport,
};

use crate::text::{take_chars, truncate_with_ellipsis};

/// Read-set entries kept in the report
pub const READ_PATHS_LIMIT: usize = 10;
/// Commands kept in the report, in encounter order
pub const COMMANDS_LIMIT: usize = 10;
/// Raw commands longer than this are cut and get "..."
pub const COMMAND_PREVIEW_CHARS: usize = 60;
/// Grep patterns are cut to this many characters in the read set
pub const GREP_PATTERN_CHARS: usize = 30;

/// Accumulates tool invocations into a [`ToolUsageReport`].
pub struct ToolUsageAggregator<'a> {
    mapper: &'a dyn ToolMapper,
    report: ToolUsageReport,
}

impl<'a> ToolUsageAggregator<'a> {
    pub fn new(mapper: &'a dyn ToolMapper) -> Self {
        Self {
            mapper,
            report: ToolUsageReport::default(),
        }
    }

    /// Record every tool invocation of an event; non-assistant events contribute nothing.
    pub fn add_event(&mut self, event: &Event) {
        for invocation in event.tool_uses() {
            self.record(invocation);
        }
    }

    pub fn record(&mut self, invocation: ToolInvocation<'_>) {
        let kind = self.mapper.classify(invocation.name);
        let report = &mut self.report;

        *report
            .tool_counts
            .entry(invocation.name.to_string())
            .or_insert(0) += 1;
        *report.kind_counts.entry(kind).or_insert(0) += 1;

        let input = invocation.input;
        match kind {
            ToolKind::Read => {
                if let Some(path) = FileArgs::from_input(input).path() {
                    report.files_read.insert(path.to_string());
                }
            }
            ToolKind::Write => {
                if let Some(path) = FileArgs::from_input(input).path() {
                    report.files_written.insert(path.to_string());
                }
            }
            ToolKind::Edit => {
                if let Some(path) = FileArgs::from_input(input).path() {
                    report.files_edited.insert(path.to_string());
                }
            }
            ToolKind::Execute => {
                let args = ExecuteArgs::from_input(input);
                let entry = match (args.description(), args.command()) {
                    (Some(description), _) => Some(description.to_string()),
                    (None, Some(command)) => Some(truncate_with_ellipsis(
                        command,
                        COMMAND_PREVIEW_CHARS,
                        COMMAND_PREVIEW_CHARS,
                    )),
                    (None, None) => None,
                };
                if let Some(entry) = entry {
                    report.commands_run.push(entry);
                }
            }
            ToolKind::Glob => {
                if let Some(pattern) = SearchArgs::from_input(input).pattern() {
                    report.files_read.insert(format!("glob:{}", pattern));
                }
            }
            ToolKind::Grep => {
                if let Some(pattern) = SearchArgs::from_input(input).pattern() {
                    report
                        .files_read
                        .insert(format!("grep:{}", take_chars(pattern, GREP_PATTERN_CHARS)));
                }
            }
            ToolKind::Plan
            | ToolKind::Delegate
            | ToolKind::WebFetch
            | ToolKind::WebSearch
            | ToolKind::Other => {}
        }
    }

    /// Apply output caps and hand out the report.
    pub fn finish(self) -> ToolUsageReport {
        let mut report = self.report;
        report.files_read.truncate(READ_PATHS_LIMIT);
        report.commands_run.truncate(COMMANDS_LIMIT);
        tracing::debug!(
            total_calls = report.total_calls(),
            tools = report.tool_counts.len(),
            written = report.files_written.len(),
            edited = report.files_edited.len(),
            "aggregated tool usage"
        );
        report
    }
}

/// Aggregate tool usage over a whole event sequence.
pub fn aggregate_tool_usage(events: &[Event], mapper: &dyn ToolMapper) -> ToolUsageReport {
    let mut aggregator = ToolUsageAggregator::new(mapper);
    for event in events {
        aggregator.add_event(event);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agnote_providers::ClaudeToolMapper;
    use serde_json::{Value, json};

    fn assistant(blocks: Value) -> Event {
        serde_json::from_value(json!({"type": "assistant", "message": {"content": blocks}})).unwrap()
    }

    fn tool(name: &str, input: Value) -> Value {
        json!({"type": "tool_use", "id": "t", "name": name, "input": input})
    }

    fn aggregate(events: &[Event]) -> ToolUsageReport {
        aggregate_tool_usage(events, &ClaudeToolMapper)
    }

    #[test]
    fn test_file_sets_deduplicate() {
        let events = vec![assistant(json!([
            tool("Read", json!({"file_path": "/a.rs"})),
            tool("Read", json!({"file_path": "/a.rs"})),
            tool("Write", json!({"file_path": "/new.py", "content": "x"})),
            tool("Edit", json!({"file_path": "/b.rs", "old_string": "a", "new_string": "b"})),
            tool("Edit", json!({"file_path": "/b.rs", "old_string": "b", "new_string": "c"})),
        ]))];

        let report = aggregate(&events);
        assert_eq!(report.tool_counts["Read"], 2);
        assert_eq!(report.tool_counts["Edit"], 2);
        assert_eq!(report.files_read.len(), 1);
        assert_eq!(report.files_written.iter().collect::<Vec<_>>(), vec!["/new.py"]);
        assert_eq!(report.files_edited.iter().collect::<Vec<_>>(), vec!["/b.rs"]);
        assert_eq!(report.total_calls(), 5);
    }

    #[test]
    fn test_user_tool_mentions_are_ignored() {
        let user: Event = serde_json::from_value(json!({
            "type": "user",
            "message": {"content": [tool("Write", json!({"file_path": "/x"}))]}
        }))
        .unwrap();
        let report = aggregate(&[user]);
        assert_eq!(report.total_calls(), 0);
        assert!(report.files_written.is_empty());
    }

    #[test]
    fn test_bash_prefers_description() {
        let long = "x".repeat(80);
        let events = vec![assistant(json!([
            tool("Bash", json!({"command": "cargo test", "description": "Run tests"})),
            tool("Bash", json!({"command": "git status"})),
            tool("Bash", json!({"command": long})),
            tool("Bash", json!({"command": "a".repeat(60)})),
            tool("Bash", json!({})),
        ]))];

        let report = aggregate(&events);
        assert_eq!(
            report.commands_run,
            vec![
                "Run tests".to_string(),
                "git status".to_string(),
                format!("{}...", "x".repeat(60)),
                "a".repeat(60),
            ]
        );
        assert_eq!(report.tool_counts["Bash"], 5);
    }

    #[test]
    fn test_search_pseudo_paths() {
        let events = vec![assistant(json!([
            tool("Glob", json!({"pattern": "**/*.rs"})),
            tool("Grep", json!({"pattern": "fn very_long_function_name_that_goes_on_and_on"})),
            tool("Grep", json!({"pattern": ""})),
        ]))];

        let report = aggregate(&events);
        let read: Vec<_> = report.files_read.iter().map(String::as_str).collect();
        assert_eq!(
            read,
            vec!["glob:**/*.rs", "grep:fn very_long_function_name_tha"]
        );
        assert_eq!(report.count_of(ToolKind::Grep), 2);
    }

    #[test]
    fn test_caps() {
        let mut blocks = Vec::new();
        for i in 0..15 {
            blocks.push(tool("Read", json!({"file_path": format!("/f{}.rs", i)})));
            blocks.push(tool("Bash", json!({"command": format!("step {}", i)})));
        }
        let report = aggregate(&[assistant(Value::Array(blocks))]);

        assert_eq!(report.files_read.len(), READ_PATHS_LIMIT);
        assert_eq!(report.commands_run.len(), COMMANDS_LIMIT);
        assert_eq!(report.commands_run[0], "step 0");
        assert_eq!(report.commands_run[9], "step 9");
        // Counts are never capped
        assert_eq!(report.tool_counts["Read"], 15);
    }

    #[test]
    fn test_unknown_tools_counted_only() {
        let events = vec![assistant(json!([
            tool("mcp__linear__create_issue", json!({"title": "x"})),
            tool("TodoWrite", json!({"todos": []})),
            {"type": "tool_use", "input": {"file_path": "/nameless"}},
        ]))];

        let report = aggregate(&events);
        assert_eq!(report.total_calls(), 3);
        assert_eq!(report.count_of(ToolKind::Other), 2);
        assert_eq!(report.count_of(ToolKind::Plan), 1);
        assert_eq!(report.tool_counts[""], 1);
        assert!(report.files_read.is_empty());
    }

    #[test]
    fn test_null_tool_name_is_still_counted() {
        let events = vec![assistant(json!([
            {"type": "tool_use", "id": "t1", "name": null, "input": {"file_path": "/x"}},
            tool("Read", json!({"file_path": "/a.rs"})),
        ]))];

        let report = aggregate(&events);
        assert_eq!(report.total_calls(), 2);
        assert_eq!(report.tool_counts[""], 1);
        assert_eq!(report.count_of(ToolKind::Other), 1);
        assert_eq!(report.files_read.len(), 1);
    }

    #[test]
    fn test_count_total_matches_invocations() {
        let events = vec![
            assistant(json!([
                {"type": "text", "text": "let me look"},
                tool("Read", json!({"file_path": "/a"})),
                tool("Grep", json!({"pattern": "x"})),
            ])),
            assistant(json!("plain text reply")),
            assistant(json!([tool("Task", json!({"prompt": "research"}))])),
        ];

        let invocations: usize = events.iter().map(|e| e.tool_uses().count()).sum();
        let report = aggregate(&events);
        assert_eq!(report.total_calls(), invocations);
        assert_eq!(report.kind_counts.values().sum::<usize>(), invocations);
    }
}
