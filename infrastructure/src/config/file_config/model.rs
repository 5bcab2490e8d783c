//! Model selection from TOML (`[model]` section)

use mcq_domain::Model;
use mcq_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "TheBloke/Mistral-7B-Instruct-v0.2-GGUF"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier; unset means the built-in default
    pub name: Option<String>,
}

impl FileModelConfig {
    /// Parse the model name, collecting an issue when it is blank.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match &self.name {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyModelName {
                        field: "model.name".to_string(),
                    },
                    message: "model.name: model name cannot be empty".to_string(),
                }],
            ),
            Some(s) => {
                let Ok(model) = s.trim().parse::<Model>();
                (Some(model), Vec::new())
            }
        }
    }

    /// Configured model, or the default when unset or blank
    pub fn model(&self) -> Model {
        self.parse_model().0.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_custom() {
        let config = FileModelConfig {
            name: Some("gpt-4o-mini".to_string()),
        };
        assert_eq!(config.model(), Model::Gpt4oMini);

        let config = FileModelConfig {
            name: Some("acme/physics-7b".to_string()),
        };
        assert_eq!(config.model(), Model::Custom("acme/physics-7b".to_string()));
    }

    #[test]
    fn test_blank_name_is_an_error() {
        let config = FileModelConfig {
            name: Some("  ".to_string()),
        };
        let (model, issues) = config.parse_model();
        assert!(model.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(config.model(), Model::FlanT5Small);
    }
}
