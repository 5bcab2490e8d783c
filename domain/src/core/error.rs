//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Concept prompt cannot be empty")]
    EmptyPrompt,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid generation parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_display() {
        let error = DomainError::EmptyPrompt;
        assert_eq!(error.to_string(), "Concept prompt cannot be empty");
    }
}
