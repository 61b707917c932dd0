use agnote_types::{SessionType, ToolKind, ToolUsageReport};

/// More file reads than this count as exploration on their own
pub const READ_HEAVY_THRESHOLD: usize = 3;

/// Derive the session label from tool usage; first matching rule wins.
pub fn classify_session(report: &ToolUsageReport) -> SessionType {
    let has_changes = report.has_file_changes();
    let has_planning = report.count_of(ToolKind::Plan) > 0;
    let has_reads = report.count_of(ToolKind::Read) > READ_HEAVY_THRESHOLD;
    let has_search = report
        .kind_counts
        .iter()
        .any(|(kind, &n)| kind.is_search() && n > 0);
    let has_agents = report.count_of(ToolKind::Delegate) > 0;

    if has_changes && has_planning {
        SessionType::PlanningAndImplementation
    } else if has_changes {
        SessionType::Implementation
    } else if has_planning {
        SessionType::Planning
    } else if has_reads || has_search {
        SessionType::Research
    } else if has_agents {
        SessionType::AgentResearch
    } else {
        SessionType::Discussion
    }
}
