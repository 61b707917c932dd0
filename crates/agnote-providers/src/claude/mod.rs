pub mod io;
pub mod tool_mapping;

use crate::Result;
use crate::traits::{SessionParser, ToolMapper};
use agnote_types::{Event, ToolKind};
use std::path::Path;

pub use self::io::{parse_claude_bytes, parse_claude_transcript, read_claude_file};
pub use self::tool_mapping::classify_tool;

/// Claude Code JSONL transcript parser
pub struct ClaudeParser;

impl SessionParser for ClaudeParser {
    fn parse_file(&self, path: &Path) -> Result<Vec<Event>> {
        read_claude_file(path)
    }

    fn parse_record(&self, line: &str) -> Result<Option<Event>> {
        io::parse_claude_record(line)
    }
}

/// Claude Code tool mapper
pub struct ClaudeToolMapper;

impl ToolMapper for ClaudeToolMapper {
    fn classify(&self, tool_name: &str) -> ToolKind {
        classify_tool(tool_name).unwrap_or(ToolKind::Other)
    }
}
