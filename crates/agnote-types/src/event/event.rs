use serde::Deserialize;
use serde_json::Value;

use super::content::{ContentItem, Message};
use super::lenient;

/// Speaker of a transcript line (`type` field)
///
/// Kinds other than `user` and `assistant` (summaries, file-history
/// snapshots, system notices) are kept so counts stay faithful, but no
/// extractor looks at them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EventKind {
    User,
    Assistant,
    Other(String),
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::Other(String::new())
    }
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => EventKind::User,
            "assistant" => EventKind::Assistant,
            _ => EventKind::Other(value),
        }
    }
}

/// One decoded transcript line
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default, deserialize_with = "lenient::or_default")]
    pub kind: EventKind,

    /// ISO-8601 string as written by the agent; compared lexicographically
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub timestamp: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub message: Message,
}

impl Event {
    pub fn is_user(&self) -> bool {
        self.kind == EventKind::User
    }

    pub fn is_assistant(&self) -> bool {
        self.kind == EventKind::Assistant
    }

    /// Timestamp for ordering and filtering; absent timestamps compare as ""
    pub fn timestamp_key(&self) -> &str {
        self.timestamp.as_deref().unwrap_or("")
    }

    /// Typed prompt text of a user event, if it is a non-blank string.
    ///
    /// Tool results are also delivered as `user` lines but carry block
    /// arrays, so they never qualify.
    pub fn user_prompt(&self) -> Option<&str> {
        if !self.is_user() {
            return None;
        }
        self.message
            .content
            .as_text()
            .filter(|text| !text.trim().is_empty())
    }

    /// Tool invocations made by the assistant in this event
    pub fn tool_uses(&self) -> impl Iterator<Item = ToolInvocation<'_>> {
        let blocks: &[ContentItem] = if self.is_assistant() {
            self.message.content.blocks()
        } else {
            &[]
        };
        blocks.iter().filter_map(|item| match item {
            ContentItem::ToolUse { name, input } => Some(ToolInvocation {
                name: name.as_str(),
                input,
            }),
            _ => None,
        })
    }
}

/// Borrowed view of a single tool invocation
#[derive(Debug, Clone, Copy)]
pub struct ToolInvocation<'a> {
    pub name: &'a str,
    pub input: &'a Value,
}
