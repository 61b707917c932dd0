use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// `message` object of a transcript line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: MessageContent,
}

/// Message body: plain string (typed user prompts), block array, or anything else
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(#[serde(deserialize_with = "lenient::content_items")] Vec<ContentItem>),
    Other(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Blocks(Vec::new())
    }
}

impl MessageContent {
    /// Plain string body, if this is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Content blocks; empty for string or opaque bodies
    pub fn blocks(&self) -> &[ContentItem] {
        match self {
            MessageContent::Blocks(items) => items,
            _ => &[],
        }
    }
}

/// One block inside a content array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text {
        #[serde(default, deserialize_with = "lenient::or_default")]
        text: String,
    },
    ToolUse {
        #[serde(default, deserialize_with = "lenient::or_default")]
        name: String,
        #[serde(default)]
        input: Value,
    },
    #[serde(other)]
    Unknown,
}
