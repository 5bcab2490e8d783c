//! Local inference server adapter
//!
//! Talks to a self-hosted server (llama.cpp server, TGI, vLLM) through its
//! OpenAI-compatible `/v1/completions` endpoint. Loading the model is the
//! server's job; creating a session only checks that the server is up.

use super::http::{build_client, endpoint, map_transport_error, read_json};
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use mcq_application::ports::llm_gateway::{GatewayError, LlmSession};
use mcq_domain::{GenerationRequest, LocalProviderConfig, Model};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const COMPLETIONS_PATH: &str = "/v1/completions";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repetition_penalty: Option<f32>,
}

impl<'a> CompletionRequest<'a> {
    fn new(model: &'a Model, request: &'a GenerationRequest) -> Self {
        Self {
            model: model.as_str(),
            prompt: &request.prompt,
            max_tokens: request.params.max_new_tokens,
            temperature: request.params.temperature,
            top_p: request.params.top_p,
            repetition_penalty: request.params.repetition_penalty,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

impl CompletionResponse {
    fn into_text(self) -> Result<String, GatewayError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| GatewayError::InvalidResponse("No choices in completion".to_string()))
    }
}

pub struct LocalServerAdapter {
    client: Client,
    config: LocalProviderConfig,
}

impl LocalServerAdapter {
    pub fn new(config: LocalProviderConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(config.timeout_seconds)?,
            config,
        })
    }

    async fn probe(&self, path: &str) -> Result<(), GatewayError> {
        let url = endpoint(&self.config.base_url, path);
        debug!(url = %url, "Probing local inference server");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(GatewayError::ModelNotAvailable(format!(
                "Inference server at {} is not ready ({})",
                self.config.base_url,
                response.status()
            )))
        }
    }
}

#[async_trait]
impl ProviderAdapter for LocalServerAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.family().is_local()
    }

    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        if let Some(path) = &self.config.health_path {
            self.probe(path).await?;
        }
        info!(model = %model, url = %self.config.base_url, "Local inference server ready");

        Ok(Box::new(LocalServerSession {
            client: self.client.clone(),
            url: endpoint(&self.config.base_url, COMPLETIONS_PATH),
            model: model.clone(),
        }))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        Ok(Model::presets()
            .into_iter()
            .filter(|m| self.supports_model(m))
            .collect())
    }
}

pub struct LocalServerSession {
    client: Client,
    url: String,
    model: Model,
}

#[async_trait]
impl LlmSession for LocalServerSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let body = CompletionRequest::new(&self.model, request);
        debug!(
            model = %self.model,
            max_tokens = body.max_tokens,
            "Calling completions endpoint"
        );

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        read_json::<CompletionResponse>(response).await?.into_text()
    }
}
