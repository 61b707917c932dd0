use agnote_types::Event;

/// Keep events at or after `since` (inclusive, lexicographic).
///
/// Events without a timestamp compare as the empty string, so any non-empty
/// bound excludes them. An empty bound keeps everything.
pub fn filter_since(events: Vec<Event>, since: &str) -> Vec<Event> {
    if since.is_empty() {
        return events;
    }

    let before = events.len();
    let kept: Vec<Event> = events
        .into_iter()
        .filter(|event| event.timestamp_key() >= since)
        .collect();

    tracing::debug!(
        since,
        kept = kept.len(),
        dropped = before - kept.len(),
        "filtered events by timestamp"
    );
    kept
}
