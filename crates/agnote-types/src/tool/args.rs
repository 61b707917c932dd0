use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments of Read / Write / Edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl FileArgs {
    pub fn from_input(input: &Value) -> Self {
        serde_json::from_value(input.clone()).unwrap_or_default()
    }

    /// Non-empty file path, if given
    pub fn path(&self) -> Option<&str> {
        non_empty(self.file_path.as_deref())
    }
}

/// Arguments of a shell invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecuteArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Human-written summary of what the command does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ExecuteArgs {
    pub fn from_input(input: &Value) -> Self {
        serde_json::from_value(input.clone()).unwrap_or_default()
    }

    pub fn command(&self) -> Option<&str> {
        non_empty(self.command.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

/// Arguments of Glob / Grep
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl SearchArgs {
    pub fn from_input(input: &Value) -> Self {
        serde_json::from_value(input.clone()).unwrap_or_default()
    }

    pub fn pattern(&self) -> Option<&str> {
        non_empty(self.pattern.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
