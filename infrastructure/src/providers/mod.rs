//! Backend adapters behind the [`LlmGateway`](mcq_application::LlmGateway) port
//!
//! Each adapter serves one kind of backend; [`RoutingGateway`] picks the
//! adapter for a model.

mod http;
pub mod local;
pub mod openai;
pub mod routing;

pub use local::LocalServerAdapter;
pub use openai::OpenAiAdapter;
pub use routing::RoutingGateway;

use async_trait::async_trait;
use mcq_application::ports::llm_gateway::{GatewayError, LlmSession};
use mcq_domain::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Self-hosted inference server with an OpenAI-compatible completions API
    #[default]
    Local,
    /// Hosted chat-completion API
    OpenAi,
}

impl ProviderKind {
    /// Parse a provider name as written in config
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "local" => Some(ProviderKind::Local),
            "openai" => Some(ProviderKind::OpenAi),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Local => "local",
            ProviderKind::OpenAi => "openai",
        }
    }

    /// Human-readable backend name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Local => "local inference server",
            ProviderKind::OpenAi => "OpenAI API",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    fn supports_model(&self, model: &Model) -> bool;
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}
