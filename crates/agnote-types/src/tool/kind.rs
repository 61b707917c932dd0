use serde::{Deserialize, Serialize};

/// Tool classification by what the aggregator records for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Reads a single file (path goes to the read set)
    Read,
    /// Creates or overwrites a file
    Write,
    /// Edits an existing file in place
    Edit,
    /// Runs a shell command
    Execute,
    /// File-name pattern search
    Glob,
    /// File-content search
    Grep,
    /// Task list / planning
    Plan,
    /// Delegates work to a sub-agent
    Delegate,
    /// Fetches a web page
    WebFetch,
    /// Runs a web search
    WebSearch,
    /// Counted but otherwise ignored
    Other,
}

impl ToolKind {
    /// Kinds that only look at the codebase without touching it
    pub fn is_search(self) -> bool {
        matches!(self, ToolKind::Glob | ToolKind::Grep)
    }

    pub fn is_web(self) -> bool {
        matches!(self, ToolKind::WebFetch | ToolKind::WebSearch)
    }
}
