//! Provider configuration from TOML (`[providers]` section)

use mcq_domain::{
    ConfigIssue, ConfigIssueCode, LocalProviderConfig, OpenAiProviderConfig, ProviderConfig,
    Severity,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Provider names accepted in `default` and `routing`
pub const KNOWN_PROVIDERS: [&str; 2] = ["local", "openai"];

/// Local inference server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocalConfig {
    /// Base URL of the server's OpenAI-compatible API.
    pub base_url: String,
    /// Readiness probe path; an empty string disables the probe.
    pub health_path: String,
    /// HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileLocalConfig {
    fn default() -> Self {
        let defaults = LocalProviderConfig::default();
        Self {
            base_url: defaults.base_url,
            health_path: defaults.health_path.unwrap_or_default(),
            timeout_seconds: defaults.timeout_seconds,
        }
    }
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the API (any OpenAI-compatible endpoint works).
    pub base_url: String,
    /// HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let defaults = OpenAiProviderConfig::default();
        Self {
            api_key_env: defaults.api_key_env,
            api_key: defaults.api_key,
            base_url: defaults.base_url,
            timeout_seconds: defaults.timeout_seconds,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "local" or "openai".
    pub default: Option<String>,
    /// Local inference server settings.
    pub local: FileLocalConfig,
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}

impl FileProvidersConfig {
    /// Convert into the provider-neutral domain type.
    pub fn to_provider_config(&self) -> ProviderConfig {
        let health_path = Some(self.local.health_path.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        ProviderConfig {
            default: self.default.clone(),
            routing: self.routing.clone(),
            local: LocalProviderConfig {
                base_url: self.local.base_url.clone(),
                health_path,
                timeout_seconds: self.local.timeout_seconds,
            },
            openai: OpenAiProviderConfig {
                api_key_env: self.openai.api_key_env.clone(),
                api_key: self.openai.api_key.clone(),
                base_url: self.openai.base_url.clone(),
                timeout_seconds: self.openai.timeout_seconds,
            },
        }
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(default) = &self.default {
            check_provider_name("providers.default", default, &mut issues);
        }

        let mut routes: Vec<_> = self.routing.iter().collect();
        routes.sort();
        for (model, provider) in routes {
            check_provider_name(
                &format!("providers.routing.\"{}\"", model),
                provider,
                &mut issues,
            );
        }

        for (field, seconds) in [
            ("providers.local.timeout_seconds", self.local.timeout_seconds),
            ("providers.openai.timeout_seconds", self.openai.timeout_seconds),
        ] {
            if seconds == 0 {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                        value: "0".to_string(),
                    },
                    message: format!("{}: timeout cannot be 0", field),
                });
            }
        }

        issues
    }
}

fn check_provider_name(field: &str, value: &str, issues: &mut Vec<ConfigIssue>) {
    if KNOWN_PROVIDERS.contains(&value) {
        return;
    }
    issues.push(ConfigIssue {
        severity: Severity::Warning,
        code: ConfigIssueCode::UnknownProvider {
            field: field.to_string(),
            value: value.to_string(),
        },
        message: format!(
            "{}: unknown provider '{}' (expected one of: {}), ignoring",
            field,
            value,
            KNOWN_PROVIDERS.join(", ")
        ),
    });
}
