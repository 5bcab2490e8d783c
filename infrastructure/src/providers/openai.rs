//! OpenAI chat-completion adapter
//!
//! Any endpoint that speaks the `/v1/chat/completions` protocol works;
//! point `base_url` elsewhere for compatible hosts.

use super::http::{build_client, endpoint, map_transport_error, read_json};
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use mcq_application::ports::llm_gateway::{GatewayError, LlmSession};
use mcq_domain::{GenerationRequest, Model, ModelFamily, OpenAiProviderConfig};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

impl<'a> ChatRequest<'a> {
    fn new(model: &'a Model, request: &'a GenerationRequest) -> Self {
        Self {
            model: model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.params.max_new_tokens,
            temperature: request.params.temperature,
            top_p: request.params.top_p,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String, GatewayError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))?;
        choice
            .message
            .content
            .ok_or_else(|| GatewayError::InvalidResponse("Choice has no content".to_string()))
    }
}

pub struct OpenAiAdapter {
    client: Client,
    config: OpenAiProviderConfig,
}

impl OpenAiAdapter {
    pub fn new(config: OpenAiProviderConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(config.timeout_seconds)?,
            config,
        })
    }

    fn api_key(&self) -> Result<String, GatewayError> {
        self.config.resolve_api_key().ok_or_else(|| {
            GatewayError::MissingCredentials(format!(
                "set {} or providers.openai.api_key",
                self.config.api_key_env
            ))
        })
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.family() == ModelFamily::HostedChat
    }

    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self.api_key()?;
        info!(model = %model, url = %self.config.base_url, "OpenAI session created");

        Ok(Box::new(OpenAiSession {
            client: self.client.clone(),
            url: endpoint(&self.config.base_url, CHAT_COMPLETIONS_PATH),
            api_key,
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

pub struct OpenAiSession {
    client: Client,
    url: String,
    api_key: String,
    model: Model,
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        let body = ChatRequest::new(&self.model, request);
        debug!(
            model = %self.model,
            max_tokens = body.max_tokens,
            "Calling chat completions endpoint"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        read_json::<ChatResponse>(response).await?.into_text()
    }
}
