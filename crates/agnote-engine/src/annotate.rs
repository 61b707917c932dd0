//! Cross-reference annotation of free text.
//!
//! Recognised terms are rewritten to `[[Page]]` wiki-links so exported notes
//! link into the surrounding vault. Terms are tried longest first and each
//! replaces only its first whole-word, case-insensitive occurrence.
//!
//! Re-annotation guard: a term is skipped when the text already contains a
//! `[[` marker and the term's lowercase form appears anywhere in it. Because a
//! term must be present to match at all, this means at most one link is ever
//! added per call, and text that already carries a link is left alone. This
//! is a coarse heuristic, not exact double-link detection.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

const LINK_OPEN: &str = "[[";

/// Lowercase term -> replacement link
const CROSS_REFERENCES: &[(&str, &str)] = &[
    // Languages and tools
    ("python", "[[Python]]"),
    ("bash", "[[Bash]]"),
    ("typescript", "[[TypeScript]]"),
    ("javascript", "[[JavaScript]]"),
    ("rust", "[[Rust]]"),
    ("go", "[[Go]]"),
    // Agent tooling
    ("claude code", "[[Claude Code]]"),
    ("claude", "[[Claude]]"),
    ("slash command", "[[slash commands]]"),
    ("slash commands", "[[slash commands]]"),
    ("hook", "[[Claude Code Hooks]]"),
    ("hooks", "[[Claude Code Hooks]]"),
    ("precompact", "[[PreCompact]]"),
    ("pre-compact", "[[PreCompact]]"),
    ("sessionstart", "[[SessionStart]]"),
    ("compaction", "[[compaction]]"),
    ("context window", "[[context window]]"),
    // Notes
    ("obsidian", "[[Obsidian]]"),
    ("vault", "[[Obsidian vault]]"),
    ("wiki-link", "[[wiki-links]]"),
    ("wikilink", "[[wiki-links]]"),
    ("daily note", "[[daily notes]]"),
    ("daily notes", "[[daily notes]]"),
    // General development
    ("dotfiles", "[[dotfiles]]"),
    ("git", "[[Git]]"),
    ("github", "[[GitHub]]"),
    ("api", "[[API]]"),
    ("json", "[[JSON]]"),
    ("jsonl", "[[JSONL]]"),
    ("markdown", "[[Markdown]]"),
    // Concepts
    ("prd", "[[PRD]]"),
    ("dogfooding", "[[dogfooding]]"),
    ("context management", "[[context management]]"),
    ("transcript", "[[transcript]]"),
    ("checkpoint", "[[checkpoint]]"),
];

struct CrossReference {
    term: &'static str,
    link: &'static str,
    pattern: Regex,
}

static MATCHERS: LazyLock<Vec<CrossReference>> = LazyLock::new(|| {
    let mut entries: Vec<_> = CROSS_REFERENCES
        .iter()
        .map(|&(term, link)| CrossReference {
            term,
            link,
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).unwrap(),
        })
        .collect();
    // Stable: equal-length terms keep table order.
    entries.sort_by(|a, b| b.term.len().cmp(&a.term.len()));
    entries
});

/// Insert wiki-links for recognised terms.
pub fn annotate(text: &str) -> String {
    let mut result = text.to_string();

    for entry in MATCHERS.iter() {
        if result.contains(LINK_OPEN) && result.to_lowercase().contains(entry.term) {
            continue;
        }
        let replaced = entry
            .pattern
            .replace(&result, NoExpand(entry.link))
            .into_owned();
        result = replaced;
    }

    result
}

/// Length of the shortest recognised term, in characters
pub fn shortest_term_len() -> usize {
    CROSS_REFERENCES
        .iter()
        .map(|(term, _)| term.chars().count())
        .min()
        .unwrap_or(0)
}
