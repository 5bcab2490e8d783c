//! Generation request domain
//!
//! A [`GenerationRequest`] is built once per "generate" action from the
//! concept prompt and the configured [`GenerationParams`], handed to the
//! backend, and dropped when the call returns.

use crate::core::error::DomainError;
use crate::prompt::PromptTemplate;
use crate::ConceptPrompt;
use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on generated tokens
    pub max_new_tokens: u32,
    /// Sampling temperature (0.0 = greedy)
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: Option<f32>,
    /// Penalty for repeated tokens (local backends only)
    pub repetition_penalty: Option<f32>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 256,
            temperature: 0.7,
            top_p: None,
            repetition_penalty: None,
        }
    }
}

impl GenerationParams {
    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_new_tokens == 0 {
            return Err(DomainError::InvalidParameter(
                "max_new_tokens must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(DomainError::InvalidParameter(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if let Some(top_p) = self.top_p
            && !(top_p > 0.0 && top_p <= 1.0)
        {
            return Err(DomainError::InvalidParameter(format!(
                "top_p must be within (0.0, 1.0], got {}",
                top_p
            )));
        }
        Ok(())
    }
}

/// A fully templated prompt plus its sampling parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Instruction-wrapped user prompt
    pub prompt: String,
    /// System prompt for chat backends
    pub system_prompt: &'static str,
    pub params: GenerationParams,
}

impl GenerationRequest {
    /// Wrap a concept prompt in the MCQ instruction template
    pub fn for_concept(concept: &ConceptPrompt, params: GenerationParams) -> Self {
        Self {
            prompt: PromptTemplate::mcq_prompt(concept.content()),
            system_prompt: PromptTemplate::system(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.max_new_tokens, 256);
        assert_eq!(params.temperature, 0.7);
        assert!(params.top_p.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(GenerationParams::default()
            .with_max_new_tokens(0)
            .validate()
            .is_err());
        assert!(GenerationParams::default()
            .with_temperature(2.5)
            .validate()
            .is_err());
        assert!(GenerationParams::default()
            .with_temperature(-0.1)
            .validate()
            .is_err());
        assert!(GenerationParams::default().with_top_p(0.0).validate().is_err());
        assert!(GenerationParams::default().with_top_p(0.95).validate().is_ok());
    }

    #[test]
    fn test_request_for_concept() {
        let concept = ConceptPrompt::new("Projectile motion").unwrap();
        let request = GenerationRequest::for_concept(&concept, GenerationParams::default());
        assert!(request
            .prompt
            .contains("based on the concept: \"Projectile motion\""));
        assert_eq!(request.params.max_new_tokens, 256);
        assert!(!request.system_prompt.is_empty());
    }
}
