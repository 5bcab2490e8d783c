//! Prompt domain
//!
//! Instruction templates sent to the generation backends.

mod template;

pub use template::PromptTemplate;
