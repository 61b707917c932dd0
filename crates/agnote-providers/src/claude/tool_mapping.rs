use crate::tool_spec::ToolSpec;
use agnote_types::ToolKind;

/// Registry of Claude Code tools the aggregator records
const CLAUDE_TOOLS: &[ToolSpec] = &[
    // File tools
    ToolSpec::new("Read", ToolKind::Read),
    ToolSpec::new("Write", ToolKind::Write),
    ToolSpec::new("Edit", ToolKind::Edit),
    // Execute tools
    ToolSpec::new("Bash", ToolKind::Execute),
    // Search tools
    ToolSpec::new("Glob", ToolKind::Glob),
    ToolSpec::new("Grep", ToolKind::Grep),
    // Plan tools
    ToolSpec::new("TodoWrite", ToolKind::Plan),
    // Sub-agents
    ToolSpec::new("Task", ToolKind::Delegate),
    // Web tools
    ToolSpec::new("WebFetch", ToolKind::WebFetch),
    ToolSpec::new("WebSearch", ToolKind::WebSearch),
];

/// Classify Claude Code tool by semantic kind
pub fn classify_tool(tool_name: &str) -> Option<ToolKind> {
    CLAUDE_TOOLS
        .iter()
        .find(|t| t.name == tool_name)
        .map(|spec| spec.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert_eq!(classify_tool("Read"), Some(ToolKind::Read));
        assert_eq!(classify_tool("Bash"), Some(ToolKind::Execute));
        assert_eq!(classify_tool("TodoWrite"), Some(ToolKind::Plan));
        assert_eq!(classify_tool("Task"), Some(ToolKind::Delegate));
        assert_eq!(classify_tool("WebSearch"), Some(ToolKind::WebSearch));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(classify_tool("read"), None);
        assert_eq!(classify_tool("NotebookEdit"), None);
    }

    #[test]
    fn test_registry_has_no_duplicates() {
        for (i, spec) in CLAUDE_TOOLS.iter().enumerate() {
            assert!(
                CLAUDE_TOOLS[i + 1..].iter().all(|other| other.name != spec.name),
                "duplicate entry for {}",
                spec.name
            );
        }
    }
}
