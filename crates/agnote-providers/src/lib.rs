// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Provider implementations
pub mod claude;

// Timestamp window selection
pub mod filter;

// Tool specification
pub(crate) mod tool_spec;

// Traits
pub use traits::{SessionParser, ToolMapper};

// Provider entry points
pub use claude::{
    ClaudeParser, ClaudeToolMapper, parse_claude_bytes, parse_claude_transcript, read_claude_file,
};

// Filtering
pub use filter::filter_since;

// Error types
pub use error::{Error, Result};
