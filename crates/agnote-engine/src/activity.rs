use agnote_types::{ToolKind, ToolUsageReport};
use std::path::Path;

/// Activity entries returned at most
pub const MAX_ACTIVITIES: usize = 8;
/// Created / modified files listed per section
pub const FILES_PER_SECTION: usize = 5;
/// Non-inspection commands listed
pub const NOTABLE_COMMANDS: usize = 3;

/// Commands starting with these only look at things
const INSPECTION_PREFIXES: &[&str] = &["ls", "cat", "echo", "head", "tail"];

/// File extension -> category link, matched in order
const FILE_CATEGORIES: &[(&str, &str)] = &[
    (".py", "[[Python]]"),
    (".sh", "[[Bash]]"),
    (".ts", "[[TypeScript]]"),
    (".tsx", "[[TypeScript]]"),
    (".js", "[[JavaScript]]"),
    (".jsx", "[[JavaScript]]"),
    (".rs", "[[Rust]]"),
    (".go", "[[Go]]"),
    (".md", "[[Markdown]]"),
    (".json", "[[JSON]]"),
    (".jsonl", "[[JSONL]]"),
];

/// Human-readable activity list, using the current user's home for path display.
pub fn summarize_activities(report: &ToolUsageReport) -> Vec<String> {
    summarize_activities_with_home(report, dirs::home_dir().as_deref())
}

/// Human-readable activity list.
///
/// Created files come first, then modified files, then notable commands.
/// When none of those exist, read/search/agent/web activity is described
/// from the raw counts instead.
pub fn summarize_activities_with_home(
    report: &ToolUsageReport,
    home: Option<&Path>,
) -> Vec<String> {
    let mut activities = Vec::new();

    for path in report.files_written.iter().take(FILES_PER_SECTION) {
        activities.push(file_entry("Created", path, home));
    }
    for path in report.files_edited.iter().take(FILES_PER_SECTION) {
        activities.push(file_entry("Modified", path, home));
    }

    activities.extend(
        report
            .commands_run
            .iter()
            .filter(|cmd| is_notable_command(cmd))
            .take(NOTABLE_COMMANDS)
            .map(|cmd| format!("Ran: {}", cmd)),
    );

    if activities.is_empty() {
        activities = research_activities(report);
    }

    activities.truncate(MAX_ACTIVITIES);
    activities
}

fn research_activities(report: &ToolUsageReport) -> Vec<String> {
    let mut activities = Vec::new();

    let reads = report.count_of(ToolKind::Read);
    if reads > 0 {
        activities.push(format!("Read {} files", reads));
    }
    let searches = report.count_of(ToolKind::Grep);
    if searches > 0 {
        activities.push(format!("Searched codebase ({} searches)", searches));
    }
    let agents = report.count_of(ToolKind::Delegate);
    if agents > 0 {
        activities.push(format!("Launched {} research agents", agents));
    }
    if report
        .kind_counts
        .iter()
        .any(|(kind, &n)| kind.is_web() && n > 0)
    {
        activities.push("Researched web resources".to_string());
    }

    activities
}

fn file_entry(verb: &str, path: &str, home: Option<&Path>) -> String {
    let display = simplify_path(path, home);
    match file_category(path) {
        Some(category) => format!("{}: `{}` ({})", verb, display, category),
        None => format!("{}: `{}`", verb, display),
    }
}

fn is_notable_command(command: &str) -> bool {
    !INSPECTION_PREFIXES
        .iter()
        .any(|prefix| command.starts_with(prefix))
}

/// Category link for a file path, by extension
pub fn file_category(path: &str) -> Option<&'static str> {
    FILE_CATEGORIES
        .iter()
        .find(|(ext, _)| path.ends_with(ext))
        .map(|(_, category)| *category)
}

/// Shorten a path for display.
///
/// A path under `home` is shown relative to `~`; anything with more than
/// four `/`-separated parts is cut to `.../<parent>/<file>`.
pub fn simplify_path(path: &str, home: Option<&Path>) -> String {
    let path = match home.and_then(|home| Path::new(path).strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.to_string(),
    };

    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() > 4 {
        format!(".../{}", parts[parts.len() - 2..].join("/"))
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ToolUsageReport {
        ToolUsageReport::default()
    }

    fn count(report: &mut ToolUsageReport, kind: ToolKind, n: usize) {
        report.kind_counts.insert(kind, n);
    }

    #[test]
    fn test_simplify_path() {
        assert_eq!(simplify_path("/home/u/project/main.py", None), ".../project/main.py");
        assert_eq!(simplify_path("/etc/hosts", None), "/etc/hosts");
        assert_eq!(simplify_path("a/b/c/d", None), "a/b/c/d");
        assert_eq!(simplify_path("relative.rs", None), "relative.rs");
    }

    #[test]
    fn test_simplify_path_under_home() {
        let home = Path::new("/home/alex");
        assert_eq!(simplify_path("/home/alex/notes.md", Some(home)), "~/notes.md");
        assert_eq!(simplify_path("/home/alex/a/b/c.rs", Some(home)), "~/a/b/c.rs");
        assert_eq!(
            simplify_path("/home/alex/a/b/c/d.rs", Some(home)),
            ".../c/d.rs"
        );
        assert_eq!(simplify_path("/home/alex", Some(home)), "~");
        // Component-wise prefix, not string prefix
        assert_eq!(
            simplify_path("/home/alexa/x.rs", Some(home)),
            "/home/alexa/x.rs"
        );
    }

    #[test]
    fn test_file_category() {
        assert_eq!(file_category("main.py"), Some("[[Python]]"));
        assert_eq!(file_category("app.tsx"), Some("[[TypeScript]]"));
        assert_eq!(file_category("log.jsonl"), Some("[[JSONL]]"));
        assert_eq!(file_category("data.json"), Some("[[JSON]]"));
        assert_eq!(file_category("Makefile"), None);
    }

    #[test]
    fn test_created_then_modified_then_commands() {
        let mut r = report();
        r.files_written.insert("/tmp/new.rs".to_string());
        r.files_edited.insert("/tmp/old.txt".to_string());
        r.commands_run = vec![
            "ls -la".to_string(),
            "Run tests".to_string(),
            "cat Cargo.toml".to_string(),
            "cargo build".to_string(),
        ];

        let activities = summarize_activities_with_home(&r, None);
        assert_eq!(
            activities,
            vec![
                "Created: `/tmp/new.rs` ([[Rust]])",
                "Modified: `/tmp/old.txt`",
                "Ran: Run tests",
                "Ran: cargo build",
            ]
        );
    }

    #[test]
    fn test_section_caps_and_total_cap() {
        let mut r = report();
        for i in 0..7 {
            r.files_written.insert(format!("/w{}.py", i));
            r.files_edited.insert(format!("/e{}.py", i));
        }
        r.commands_run = vec!["make".to_string(); 5];

        let activities = summarize_activities_with_home(&r, None);
        assert_eq!(activities.len(), MAX_ACTIVITIES);
        assert_eq!(activities.iter().filter(|a| a.starts_with("Created")).count(), 5);
        assert_eq!(activities.iter().filter(|a| a.starts_with("Modified")).count(), 3);
    }

    #[test]
    fn test_inspection_prefixes_are_raw_prefixes() {
        assert!(!is_notable_command("lsof -i :8080"));
        assert!(!is_notable_command("tail -f log"));
        assert!(is_notable_command("git ls-files"));
        assert!(is_notable_command("List files"));
    }

    #[test]
    fn test_fallback_order() {
        let mut r = report();
        count(&mut r, ToolKind::WebSearch, 1);
        count(&mut r, ToolKind::Delegate, 2);
        count(&mut r, ToolKind::Grep, 2);
        count(&mut r, ToolKind::Read, 5);

        assert_eq!(
            summarize_activities_with_home(&r, None),
            vec![
                "Read 5 files",
                "Searched codebase (2 searches)",
                "Launched 2 research agents",
                "Researched web resources",
            ]
        );
    }

    #[test]
    fn test_fallback_only_when_nothing_else() {
        let mut r = report();
        count(&mut r, ToolKind::Read, 5);
        r.commands_run = vec!["cargo test".to_string()];
        assert_eq!(summarize_activities_with_home(&r, None), vec!["Ran: cargo test"]);

        // Inspection-only commands do not block the fallback
        r.commands_run = vec!["ls".to_string()];
        assert_eq!(summarize_activities_with_home(&r, None), vec!["Read 5 files"]);
    }

    #[test]
    fn test_nothing_at_all() {
        assert!(summarize_activities_with_home(&report(), None).is_empty());
    }
}
