use crate::{Error, Result};
use agnote_types::Event;
use serde_json::Value;
use std::path::Path;

/// Read a Claude Code JSONL transcript into events.
///
/// Lines that are blank, not UTF-8, not JSON, or not a JSON object are
/// skipped; only a failure to read the file itself is an error.
pub fn read_claude_file(path: &Path) -> Result<Vec<Event>> {
    let bytes = std::fs::read(path)?;
    let events = parse_claude_bytes(&bytes);
    tracing::debug!(path = %path.display(), events = events.len(), "read transcript");
    Ok(events)
}

/// Parse transcript text already in memory
pub fn parse_claude_transcript(text: &str) -> Vec<Event> {
    parse_claude_bytes(text.as_bytes())
}

/// Parse raw transcript bytes; each line is decoded on its own
pub fn parse_claude_bytes(bytes: &[u8]) -> Vec<Event> {
    let mut events = Vec::new();
    let mut skipped = 0usize;

    for (i, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let decoded = std::str::from_utf8(raw)
            .map_err(|err| Error::Parse(err.to_string()))
            .and_then(parse_claude_record);

        match decoded {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(err) => {
                skipped += 1;
                tracing::trace!(line = i + 1, error = %err, "skipping undecodable line");
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped undecodable transcript lines");
    }
    events
}

/// Decode one line; `Ok(None)` for blank lines
pub(crate) fn parse_claude_record(line: &str) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    // Parse once as a raw value so non-object lines (arrays, scalars) are
    // rejected instead of being matched positionally onto the struct.
    let value: Value = serde_json::from_str(line)?;
    if !value.is_object() {
        return Err(Error::Parse("record is not a JSON object".to_string()));
    }
    Ok(Some(serde_json::from_value(value)?))
}
