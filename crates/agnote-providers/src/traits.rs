use agnote_types::{Event, ToolKind};
use std::path::Path;

use crate::Result;

/// Transcript decoding
///
/// Responsibilities:
/// - Turn a raw log file into an ordered event sequence
/// - Drop records that cannot be decoded without failing the file
pub trait SessionParser: Send + Sync {
    /// Parse entire file into event sequence
    fn parse_file(&self, path: &Path) -> Result<Vec<Event>>;

    /// Parse a single record
    /// Returns None for blank lines; malformed lines are an error the caller may skip
    fn parse_record(&self, line: &str) -> Result<Option<Event>>;
}

/// Tool name interpretation
///
/// Maps a provider's tool names onto the kinds the aggregator knows how to
/// record. Unknown names map to `ToolKind::Other`.
pub trait ToolMapper: Send + Sync {
    fn classify(&self, tool_name: &str) -> ToolKind;
}
