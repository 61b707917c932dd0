// agnote: checkpoint summaries and markdown notes from Claude Code transcripts.
//
// The binary is a thin shell. Every run reads one JSONL transcript, applies an
// optional timestamp bound and prints exactly one JSON document on stdout:
// the session summary, the export acknowledgement, or an error record.
// Diagnostics go to stderr through tracing so stdout stays parseable.

mod args;
mod commands;
pub mod logging;
pub mod output;
pub mod types;

pub use args::Cli;
pub use commands::{expand_tilde, run};
pub use output::Report;
