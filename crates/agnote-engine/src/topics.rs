use agnote_types::Event;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::annotate::annotate;
use crate::text::{take_chars, truncate_with_ellipsis};

/// Topics returned at most
pub const MAX_TOPICS: usize = 8;
/// Cleaned prompts shorter than this are not topics
pub const MIN_TOPIC_CHARS: usize = 20;
/// Excerpt length limit, ellipsis included
pub const MAX_EXCERPT_CHARS: usize = 150;
/// Leading sentences kept per prompt
pub const EXCERPT_SENTENCES: usize = 2;
/// Topics agreeing on this many lowercase leading characters are duplicates
pub const DEDUP_PREFIX_CHARS: usize = 50;

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Short, deduplicated excerpts of what the user asked for.
pub fn extract_topics(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut topics = Vec::new();

    for prompt in events.iter().filter_map(Event::user_prompt) {
        let Some(topic) = excerpt(prompt) else {
            continue;
        };

        let key = take_chars(&topic.to_lowercase(), DEDUP_PREFIX_CHARS).to_string();
        if seen.insert(key) {
            topics.push(topic);
            if topics.len() == MAX_TOPICS {
                break;
            }
        }
    }

    topics
}

/// Cleaned, truncated, annotated excerpt of one prompt
fn excerpt(prompt: &str) -> Option<String> {
    let without_tags = MARKUP_TAG.replace_all(prompt.trim(), "");
    let clean = without_tags.replace('\n', " ");
    let clean = clean.trim();

    if clean.chars().count() < MIN_TOPIC_CHARS {
        return None;
    }

    let sentences = split_sentences(clean);
    let excerpt = if sentences.len() >= EXCERPT_SENTENCES {
        sentences[..EXCERPT_SENTENCES].join(" ")
    } else {
        clean.to_string()
    };

    let excerpt = truncate_with_ellipsis(&excerpt, MAX_EXCERPT_CHARS, MAX_EXCERPT_CHARS - 3);
    Some(annotate(&excerpt))
}

/// Split after `.`, `!` or `?` followed by whitespace; the whitespace is dropped
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(text) {
        // Punctuation is a single byte, so +1 stays on a char boundary.
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);
    sentences
}
