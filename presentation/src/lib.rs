//! Presentation layer for mcq-generator
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive question loop.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::McqRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
