//! Model value object representing a generation backend model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a model is served, which decides the backend that can run it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// Small encoder-decoder model (text2text generation)
    Seq2Seq,
    /// GPTQ/AWQ quantized causal model
    QuantizedCausal,
    /// GGUF-quantized model served by a llama.cpp-compatible server
    Gguf,
    /// Hosted chat-completion API
    HostedChat,
}

impl ModelFamily {
    /// Whether this family runs on a local inference server
    pub fn is_local(&self) -> bool {
        !matches!(self, ModelFamily::HostedChat)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::Seq2Seq => "seq2seq",
            ModelFamily::QuantizedCausal => "quantized-causal",
            ModelFamily::Gguf => "gguf",
            ModelFamily::HostedChat => "hosted-chat",
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Available generation models (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// google/flan-t5-small
    FlanT5Small,
    /// Mistral 7B Instruct, GPTQ-quantized
    MistralGptq,
    /// Mistral 7B Instruct, GGUF-quantized
    MistralGguf,
    /// Hosted gpt-4o-mini
    Gpt4oMini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::FlanT5Small => "google/flan-t5-small",
            Model::MistralGptq => "TheBloke/Mistral-7B-Instruct-v0.2-GPTQ",
            Model::MistralGguf => "TheBloke/Mistral-7B-Instruct-v0.2-GGUF",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Custom(s) => s,
        }
    }

    /// All built-in presets, in display order
    pub fn presets() -> Vec<Model> {
        vec![
            Model::FlanT5Small,
            Model::MistralGptq,
            Model::MistralGguf,
            Model::Gpt4oMini,
        ]
    }

    /// Serving family of this model.
    ///
    /// Custom names are classified by well-known substrings; anything
    /// unrecognized is treated as a local causal model.
    pub fn family(&self) -> ModelFamily {
        match self {
            Model::FlanT5Small => ModelFamily::Seq2Seq,
            Model::MistralGptq => ModelFamily::QuantizedCausal,
            Model::MistralGguf => ModelFamily::Gguf,
            Model::Gpt4oMini => ModelFamily::HostedChat,
            Model::Custom(name) => {
                let lower = name.to_ascii_lowercase();
                if lower.contains("gguf") {
                    ModelFamily::Gguf
                } else if lower.contains("gptq") || lower.contains("awq") {
                    ModelFamily::QuantizedCausal
                } else if lower.contains("t5") || lower.contains("bart") {
                    ModelFamily::Seq2Seq
                } else if ["gpt-", "o1", "o3", "o4"]
                    .iter()
                    .any(|prefix| lower.starts_with(prefix))
                {
                    ModelFamily::HostedChat
                } else {
                    ModelFamily::QuantizedCausal
                }
            }
        }
    }

    /// Short human-readable name (last path segment of the identifier)
    pub fn short_name(&self) -> &str {
        let id = self.as_str();
        id.rsplit('/').next().unwrap_or(id)
    }
}

impl Default for Model {
    /// Returns the default model (flan-t5-small)
    fn default() -> Self {
        Model::FlanT5Small
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "google/flan-t5-small" | "flan-t5-small" => Model::FlanT5Small,
            "TheBloke/Mistral-7B-Instruct-v0.2-GPTQ" => Model::MistralGptq,
            "TheBloke/Mistral-7B-Instruct-v0.2-GGUF" => Model::MistralGguf,
            "gpt-4o-mini" => Model::Gpt4oMini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::presets() {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_short_alias() {
        let model: Model = "flan-t5-small".parse().unwrap();
        assert_eq!(model, Model::FlanT5Small);
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "my-org/tiny-llama".parse().unwrap();
        assert_eq!(model, Model::Custom("my-org/tiny-llama".to_string()));
        assert_eq!(model.to_string(), "my-org/tiny-llama");
        assert_eq!(model.short_name(), "tiny-llama");
    }

    #[test]
    fn test_preset_families() {
        assert_eq!(Model::FlanT5Small.family(), ModelFamily::Seq2Seq);
        assert_eq!(Model::MistralGptq.family(), ModelFamily::QuantizedCausal);
        assert_eq!(Model::MistralGguf.family(), ModelFamily::Gguf);
        assert_eq!(Model::Gpt4oMini.family(), ModelFamily::HostedChat);
    }

    #[test]
    fn test_custom_family_inference() {
        let family = |s: &str| s.parse::<Model>().unwrap().family();
        assert_eq!(family("TheBloke/Llama-2-7B-GGUF"), ModelFamily::Gguf);
        assert_eq!(family("TheBloke/zephyr-7B-beta-AWQ"), ModelFamily::QuantizedCausal);
        assert_eq!(family("google/flan-t5-base"), ModelFamily::Seq2Seq);
        assert_eq!(family("gpt-4.1-mini"), ModelFamily::HostedChat);
        assert_eq!(family("o3-mini"), ModelFamily::HostedChat);
        assert_eq!(family("some/unknown-model"), ModelFamily::QuantizedCausal);
    }

    #[test]
    fn test_family_locality() {
        assert!(ModelFamily::Gguf.is_local());
        assert!(ModelFamily::Seq2Seq.is_local());
        assert!(!ModelFamily::HostedChat.is_local());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::FlanT5Small);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Model::Gpt4oMini).unwrap();
        assert_eq!(json, "\"gpt-4o-mini\"");
        let model: Model = serde_json::from_str("\"google/flan-t5-small\"").unwrap();
        assert_eq!(model, Model::FlanT5Small);
    }
}
