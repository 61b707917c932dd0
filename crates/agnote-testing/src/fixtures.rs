//! Fixtures for transcript generation.
//!
//! Builds Claude Code style JSONL transcripts line by line so tests can
//! describe a session declaratively instead of shipping sample files.

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// `tool_use` content block
pub fn tool_use(name: &str, input: Value) -> Value {
    json!({
        "type": "tool_use",
        "id": format!("toolu_{}", name.to_lowercase()),
        "name": name,
        "input": input,
    })
}

/// `text` content block
pub fn text_block(text: &str) -> Value {
    json!({"type": "text", "text": text})
}

/// Fluent builder for JSONL transcripts.
///
/// # Example
/// ```no_run
/// use agnote_testing::{TranscriptBuilder, tool_use};
/// use serde_json::json;
///
/// let jsonl = TranscriptBuilder::new()
///     .user("Please fix the bug in main.py")
///     .assistant_blocks(vec![tool_use("Edit", json!({"file_path": "/tmp/main.py"}))])
///     .to_jsonl();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuilder {
    lines: Vec<String>,
    clock: Option<String>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp attached to every following record until changed.
    pub fn at(mut self, timestamp: &str) -> Self {
        self.clock = Some(timestamp.to_string());
        self
    }

    /// Drop the timestamp from following records.
    pub fn untimed(mut self) -> Self {
        self.clock = None;
        self
    }

    /// Typed user prompt (string content).
    pub fn user(self, text: &str) -> Self {
        self.record("user", json!({"role": "user", "content": text}))
    }

    /// Tool result delivered back as a user record (block content).
    pub fn tool_result(self, tool_use_id: &str, output: &str) -> Self {
        self.record(
            "user",
            json!({
                "role": "user",
                "content": [{"type": "tool_result", "tool_use_id": tool_use_id, "content": output}]
            }),
        )
    }

    /// Assistant reply consisting of a single text block.
    pub fn assistant_text(self, text: &str) -> Self {
        self.assistant_blocks(vec![text_block(text)])
    }

    /// Assistant reply with arbitrary content blocks.
    pub fn assistant_blocks(self, blocks: Vec<Value>) -> Self {
        self.record(
            "assistant",
            json!({"role": "assistant", "model": "claude-sonnet-4", "content": blocks}),
        )
    }

    /// Record of an arbitrary type with the given message object.
    pub fn record(mut self, kind: &str, message: Value) -> Self {
        let mut line = json!({"type": kind, "message": message});
        if let Some(ts) = &self.clock {
            line["timestamp"] = json!(ts);
        }
        self.lines.push(line.to_string());
        self
    }

    /// Verbatim line, e.g. deliberately malformed input.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn to_jsonl(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Write the transcript to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_jsonl())?;
        Ok(())
    }
}
