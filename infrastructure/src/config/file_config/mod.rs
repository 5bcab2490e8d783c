//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod behavior;
mod generation;
mod log;
mod model;
mod output;
mod providers;
mod repl;

pub use behavior::FileBehaviorConfig;
pub use generation::FileGenerationConfig;
pub use log::FileLogConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use providers::{FileLocalConfig, FileOpenAiConfig, FileProvidersConfig, KNOWN_PROVIDERS};
pub use repl::FileReplConfig;

use mcq_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected because of one or more error-level issues
#[derive(Error, Debug)]
#[error("invalid configuration: {}", summarize(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection
    pub model: FileModelConfig,
    /// Sampling parameters
    pub generation: FileGenerationConfig,
    /// Time limits
    pub behavior: FileBehaviorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Generation log settings
    pub log: FileLogConfig,
    /// Backend settings and model routing
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.model.parse_model().1);
        issues.extend(self.generation.issues());

        if let Some(0) = self.behavior.timeout_seconds {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "behavior.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                message: "behavior.timeout_seconds: timeout cannot be 0".to_string(),
            });
        }

        issues.extend(self.providers.issues());
        issues
    }

    /// Split issues into a hard failure (any error) or the remaining warnings.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError { issues: errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcq_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
name = "TheBloke/Mistral-7B-Instruct-v0.2-GGUF"

[generation]
max_new_tokens = 512
temperature = 0.2
top_p = 0.9

[behavior]
timeout_seconds = 60

[output]
format = "raw"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/mcq/history.txt"

[log]
generation_log = "/tmp/mcq.jsonl"

[providers]
default = "local"

[providers.local]
base_url = "http://localhost:8000"
health_path = ""

[providers.routing]
"acme/physics-7b" = "openai"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.model(), Model::MistralGguf);
        assert_eq!(config.generation.max_new_tokens, 512);
        assert_eq!(config.generation.top_p, Some(0.9));
        assert_eq!(config.behavior.timeout_seconds, Some(60));
        assert_eq!(config.output.format, Some(OutputFormat::Raw));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(config.log.generation_log.as_deref(), Some("/tmp/mcq.jsonl"));

        let providers = config.providers.to_provider_config();
        assert_eq!(providers.default.as_deref(), Some("local"));
        assert_eq!(providers.local.base_url, "http://localhost:8000");
        assert!(providers.local.health_path.is_none());
        assert_eq!(providers.routing["acme/physics-7b"], "openai");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generation]
temperature = 1.0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.temperature, 1.0);
        // Defaults should apply
        assert_eq!(config.generation.max_new_tokens, 256);
        assert!(config.model.name.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.model.model(), Model::FlanT5Small);
        assert_eq!(config.behavior.timeout_seconds, Some(300));
        assert!(config.log.generation_log.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let toml_str = r#"
[model]
name = ""

[generation]
temperature = 2.5
max_new_tokens = 0

[behavior]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(ConfigIssue::is_error));

        let err = config.check().unwrap_err();
        assert_eq!(err.issues.len(), 4);
        assert!(err.to_string().contains("model name cannot be empty"));
    }

    #[test]
    fn test_check_passes_warnings_through() {
        let toml_str = r#"
[providers]
default = "anthropic"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let warnings = config.check().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);
    }
}
