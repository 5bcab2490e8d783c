//! Generate MCQ use case
//!
//! Turns a concept prompt into a multiple-choice question: template the
//! prompt, run it through the model handle, then normalize and extract.

use crate::config::BehaviorConfig;
use crate::model_handle::ModelHandle;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use mcq_domain::core::string::preview;
use mcq_domain::{
    ConceptPrompt, DomainError, Extraction, GenerationParams, GenerationRequest, Model,
    StructuredQuestion, extract_question, normalize_output, render_outcome,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a question
#[derive(Error, Debug)]
pub enum GenerateMcqError {
    #[error("Please enter a valid prompt to generate a question.")]
    EmptyPrompt,

    #[error("Invalid generation parameters: {0}")]
    InvalidParams(String),

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl From<DomainError> for GenerateMcqError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::EmptyPrompt => GenerateMcqError::EmptyPrompt,
            other => GenerateMcqError::InvalidParams(other.to_string()),
        }
    }
}

/// Input for the GenerateMcq use case
#[derive(Debug, Clone)]
pub struct GenerateMcqInput {
    /// The concept prompt as typed by the user
    pub concept: String,
    /// Sampling parameters
    pub params: GenerationParams,
}

impl GenerateMcqInput {
    pub fn new(concept: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// Result of one generate action
#[derive(Debug, Clone, Serialize)]
pub struct GenerateMcqOutput {
    pub concept: ConceptPrompt,
    pub model: Model,
    /// Backend output as received
    pub raw: String,
    /// Output after cosmetic clean-up
    pub normalized: String,
    pub extraction: Extraction,
}

impl GenerateMcqOutput {
    /// Whether a question with four options was recovered
    pub fn is_structured(&self) -> bool {
        self.extraction.success
    }

    pub fn structured(&self) -> Option<StructuredQuestion> {
        self.extraction.to_structured()
    }

    /// Markdown rendering, or the could-not-parse block
    pub fn render(&self) -> String {
        render_outcome(&self.extraction, &self.normalized)
    }
}

/// Use case for generating one multiple-choice question
pub struct GenerateMcqUseCase<G: LlmGateway + 'static> {
    handle: Arc<ModelHandle<G>>,
    behavior: BehaviorConfig,
    logger: Arc<dyn GenerationLogger>,
}

impl<G: LlmGateway + 'static> GenerateMcqUseCase<G> {
    pub fn new(handle: Arc<ModelHandle<G>>) -> Self {
        Self {
            handle,
            behavior: BehaviorConfig::default(),
            logger: Arc::new(NoGenerationLogger),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        self.handle.model()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateMcqInput,
    ) -> Result<GenerateMcqOutput, GenerateMcqError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateMcqInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerateMcqOutput, GenerateMcqError> {
        let concept = ConceptPrompt::new(input.concept)?;
        input.params.validate()?;

        let model = self.handle.model().clone();
        let request = GenerationRequest::for_concept(&concept, input.params);

        info!(model = %model, concept = %preview(concept.content(), 60), "Generating MCQ");
        self.logger.log(GenerationEvent::new(
            "generation_requested",
            serde_json::json!({
                "model": model.as_str(),
                "concept": concept.content(),
                "max_new_tokens": request.params.max_new_tokens,
                "temperature": request.params.temperature,
            }),
        ));

        let raw = match self.bounded_generate(&request, progress).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(model = %model, "Generation failed: {}", e);
                progress.on_generation_failed(&model, &e.to_string());
                self.logger.log(GenerationEvent::new(
                    "generation_failed",
                    serde_json::json!({
                        "model": model.as_str(),
                        "concept": concept.content(),
                        "error": e.to_string(),
                    }),
                ));
                return Err(e);
            }
        };

        let normalized = normalize_output(&raw);
        let extraction = extract_question(&normalized);
        debug!(
            parsed = extraction.success,
            options = extraction.options.len(),
            "Extracted MCQ from {} bytes of output",
            raw.len()
        );
        if !extraction.success {
            warn!(model = %model, "Model output could not be parsed as an MCQ");
        }

        self.logger.log(GenerationEvent::new(
            "generation_completed",
            serde_json::json!({
                "model": model.as_str(),
                "concept": concept.content(),
                "raw": raw,
                "normalized": normalized,
                "parsed": extraction.success,
            }),
        ));
        progress.on_generation_complete(&model, extraction.success);

        Ok(GenerateMcqOutput {
            concept,
            model,
            raw,
            normalized,
            extraction,
        })
    }

    /// Load (if needed) and generate, under the configured time limit.
    async fn bounded_generate(
        &self,
        request: &GenerationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GenerateMcqError> {
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, self.generate_raw(request, progress))
                .await
                .map_err(|_| GenerateMcqError::Timeout(limit))?,
            None => self.generate_raw(request, progress).await,
        }
    }

    async fn generate_raw(
        &self,
        request: &GenerationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GenerateMcqError> {
        let model = self.handle.model();

        let session = if self.handle.is_loaded() {
            self.handle.session().await?
        } else {
            progress.on_model_load_start(model);
            let loaded = self.handle.session().await;
            progress.on_model_loaded(model, loaded.is_ok());
            loaded?
        };

        progress.on_generation_start(model);
        Ok(session.generate(request).await?)
    }
}
