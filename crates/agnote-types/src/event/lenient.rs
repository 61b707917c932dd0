use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::content::ContentItem;

/// Decode a field, falling back to its default when the JSON has the wrong shape.
///
/// Transcript lines are written by another tool whose schema drifts between
/// versions, so a single odd field must never cost us the whole line.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode a content array item by item; malformed items become `Unknown`.
pub(crate) fn content_items<'de, D>(deserializer: D) -> Result<Vec<ContentItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or(ContentItem::Unknown))
        .collect())
}
