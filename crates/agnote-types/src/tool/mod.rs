pub mod args;
pub mod kind;

pub use args::*;
pub use kind::*;
