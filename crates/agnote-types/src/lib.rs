pub mod event;
pub mod report;
pub mod tool;

pub use event::*;
pub use report::*;
pub use tool::*;
