//! Testing infrastructure for agnote integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated temp directory plus CLI execution
//! - `assertions`: checks against the summary JSON the CLI prints
//! - `fixtures`: fluent builder for Claude Code JSONL transcripts

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{TranscriptBuilder, text_block, tool_use};
pub use world::{CliResult, TestWorld};
