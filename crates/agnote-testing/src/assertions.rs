//! Custom assertions for agnote-specific validation.
//!
//! Provides high-level assertions over the JSON the CLI prints:
//! - Summary shape and session type
//! - Activity and topic list contents
//! - Export acknowledgements

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the summary's session type label.
pub fn assert_session_type(json: &Value, expected: &str) -> Result<()> {
    let actual = json["session_type"]
        .as_str()
        .context("Expected 'session_type' string in JSON")?;

    if actual != expected {
        anyhow::bail!("Expected session type {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Assert that some activity entry contains every given fragment.
pub fn assert_activity_contains(json: &Value, fragments: &[&str]) -> Result<()> {
    let activities = string_list(json, "activities")?;

    if !activities
        .iter()
        .any(|a| fragments.iter().all(|f| a.contains(f)))
    {
        anyhow::bail!(
            "No activity contains all of {:?}; activities were {:?}",
            fragments,
            activities
        );
    }
    Ok(())
}

/// Assert the summary's message count.
pub fn assert_message_count(json: &Value, expected: u64) -> Result<()> {
    let actual = json["message_count"]
        .as_u64()
        .context("Expected 'message_count' number in JSON")?;

    if actual != expected {
        anyhow::bail!("Expected {} messages, got {}", expected, actual);
    }
    Ok(())
}

/// Assert a successful export acknowledgement.
pub fn assert_export_success(json: &Value, expected_messages: u64) -> Result<()> {
    if json["status"] != "success" {
        anyhow::bail!("Expected status 'success', got {}", json["status"]);
    }
    let messages = json["messages"]
        .as_u64()
        .context("Expected 'messages' number in JSON")?;
    if messages != expected_messages {
        anyhow::bail!("Expected {} exported messages, got {}", expected_messages, messages);
    }
    Ok(())
}

/// Extract a list of strings from a top-level field.
pub fn string_list(json: &Value, field: &str) -> Result<Vec<String>> {
    let items = json[field]
        .as_array()
        .with_context(|| format!("Expected '{}' array in JSON", field))?;

    items
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .with_context(|| format!("Non-string entry in '{}'", field))
        })
        .collect()
}
