use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tool::ToolKind;

/// Aggregated tool activity of one event sequence
///
/// All collections keep first-seen order. `files_read` and `commands_run`
/// are already capped by the aggregator that produced the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolUsageReport {
    /// Invocations per tool name
    pub tool_counts: IndexMap<String, usize>,
    /// Invocations per tool kind (same total as `tool_counts`)
    pub kind_counts: IndexMap<ToolKind, usize>,
    pub files_read: IndexSet<String>,
    pub files_written: IndexSet<String>,
    pub files_edited: IndexSet<String>,
    pub commands_run: Vec<String>,
}

impl ToolUsageReport {
    pub fn total_calls(&self) -> usize {
        self.tool_counts.values().sum()
    }

    pub fn count_of(&self, kind: ToolKind) -> usize {
        self.kind_counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn tools_used(&self) -> Vec<String> {
        self.tool_counts.keys().cloned().collect()
    }

    /// True when at least one file was written or edited
    pub fn has_file_changes(&self) -> bool {
        !self.files_written.is_empty() || !self.files_edited.is_empty()
    }
}

/// Coarse label describing what a session was about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "Planning + Implementation")]
    PlanningAndImplementation,
    #[serde(rename = "Implementation")]
    Implementation,
    #[serde(rename = "Planning")]
    Planning,
    #[serde(rename = "Research / Exploration")]
    Research,
    #[serde(rename = "Research (via agents)")]
    AgentResearch,
    #[serde(rename = "Discussion")]
    Discussion,
    #[serde(rename = "Empty")]
    Empty,
}

impl SessionType {
    pub fn label(self) -> &'static str {
        match self {
            SessionType::PlanningAndImplementation => "Planning + Implementation",
            SessionType::Implementation => "Implementation",
            SessionType::Planning => "Planning",
            SessionType::Research => "Research / Exploration",
            SessionType::AgentResearch => "Research (via agents)",
            SessionType::Discussion => "Discussion",
            SessionType::Empty => "Empty",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tool figures embedded in the session summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    pub total_tool_calls: usize,
    pub tools_used: Vec<String>,
    pub files_created: usize,
    pub files_modified: usize,
}

/// Checkpoint summary of a whole transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub message_count: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub session_type: SessionType,
    pub activities: Vec<String>,
    pub user_topics: Vec<String>,
    pub tool_summary: ToolSummary,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
}

impl SessionSummary {
    /// Summary of a transcript with no decodable lines
    pub fn empty() -> Self {
        Self {
            message_count: 0,
            user_messages: 0,
            assistant_messages: 0,
            session_type: SessionType::Empty,
            activities: Vec::new(),
            user_topics: Vec::new(),
            tool_summary: ToolSummary::default(),
            first_timestamp: None,
            last_timestamp: None,
        }
    }
}
