pub mod content;
pub mod event;
mod lenient;

pub use content::*;
pub use event::*;
