//! Concept prompt value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A topic supplied by the user to drive question generation (Value Object)
///
/// Any non-blank string is accepted; the content is kept exactly as typed
/// so the prompt template sees what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptPrompt {
    content: String,
}

impl ConceptPrompt {
    /// Create a concept prompt; empty or whitespace-only input is rejected
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self { content })
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for ConceptPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
