//! Sampling parameters from TOML (`[generation]` section)

use mcq_domain::GenerationParams;
use mcq_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Sampling parameters from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub repetition_penalty: Option<f32>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            max_new_tokens: params.max_new_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            repetition_penalty: params.repetition_penalty,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams {
            max_new_tokens: self.max_new_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            repetition_penalty: self.repetition_penalty,
        }
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_new_tokens == 0 {
            issues.push(out_of_range(
                "generation.max_new_tokens",
                "0".to_string(),
                "must be greater than 0",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(out_of_range(
                "generation.temperature",
                self.temperature.to_string(),
                "must be within 0.0..=2.0",
            ));
        }
        if let Some(top_p) = self.top_p
            && !(top_p > 0.0 && top_p <= 1.0)
        {
            issues.push(out_of_range(
                "generation.top_p",
                top_p.to_string(),
                "must be within (0.0, 1.0]",
            ));
        }

        issues
    }
}

fn out_of_range(field: &str, value: String, rule: &str) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        message: format!("{}: {} {}", field, value, rule),
        code: ConfigIssueCode::OutOfRange {
            field: field.to_string(),
            value,
        },
    }
}
