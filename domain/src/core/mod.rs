//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: backend models (seq2seq, quantized, GGUF, hosted chat)
//! - [`concept::ConceptPrompt`]: a validated topic string from the user
//! - [`error::DomainError`]: domain-level errors

pub mod concept;
pub mod error;
pub mod model;
pub mod string;
