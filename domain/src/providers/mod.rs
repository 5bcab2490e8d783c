//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of backend settings without depending
//! on any serialization format (TOML, JSON, etc.).

use std::collections::HashMap;

/// Top-level provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Default provider name: "local" or "openai".
    pub default: Option<String>,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
    /// Local inference server settings.
    pub local: LocalProviderConfig,
    /// Hosted OpenAI-compatible API settings.
    pub openai: OpenAiProviderConfig,
}

/// Local inference server (llama.cpp server, TGI, vLLM) configuration.
#[derive(Debug, Clone)]
pub struct LocalProviderConfig {
    /// Base URL of the server's OpenAI-compatible API.
    pub base_url: String,
    /// Path probed when a session is created; `None` skips the probe.
    pub health_path: Option<String>,
    /// HTTP timeout in seconds (default: 120).
    pub timeout_seconds: u64,
}

impl Default for LocalProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            health_path: Some("/health".to_string()),
            timeout_seconds: 120,
        }
    }
}

/// Hosted chat-completion API configuration.
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the API.
    pub base_url: String,
    /// HTTP timeout in seconds (default: 120).
    pub timeout_seconds: u64,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_seconds: 120,
        }
    }
}

impl OpenAiProviderConfig {
    /// Resolve the API key: explicit value first, then the named env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
