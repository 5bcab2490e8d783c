//! Domain layer for mcq-generator
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Concept prompt → Structured question
//!
//! A user supplies a short topic (the *concept prompt*). It is wrapped into
//! an instruction template and sent to a model backend. The free-text reply
//! is then carved into a question and four options:
//!
//! - **Normalize**: strip cosmetic noise (`Subject:` labels, escaped newlines,
//!   blank-line runs)
//! - **Extract**: scan for question/option markers and slice between them
//! - **Render**: format the result as markdown, or fall back to raw text

pub mod config;
pub mod core;
pub mod generation;
pub mod mcq;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    concept::ConceptPrompt,
    error::DomainError,
    model::{Model, ModelFamily},
};
pub use generation::{GenerationParams, GenerationRequest};
pub use mcq::{
    Extraction, StructuredQuestion, extract_question, normalize_output, render_fallback,
    render_outcome, render_question,
};
pub use prompt::PromptTemplate;
pub use providers::{LocalProviderConfig, OpenAiProviderConfig, ProviderConfig};
