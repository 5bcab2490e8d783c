//! Interactive mode
//!
//! Provides a line-editor loop that turns each entered concept into a question.

mod repl;

pub use repl::{McqRepl, ReplCommand, ReplInput};
