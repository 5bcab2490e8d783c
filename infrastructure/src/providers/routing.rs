use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use mcq_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use mcq_domain::{Model, ModelFamily, ProviderConfig};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    /// Model identifier → index into `providers`, from `[providers.routing]`
    explicit_model_routing: HashMap<String, usize>,
    default_kind: ProviderKind,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, config: &ProviderConfig) -> Self {
        let mut explicit_model_routing = HashMap::new();

        for (model_name, provider_name) in &config.routing {
            let Some(target_kind) = ProviderKind::from_name(provider_name) else {
                warn!(
                    model = %model_name,
                    "Ignoring route to unknown provider '{}'",
                    provider_name
                );
                continue;
            };

            if let Some(idx) = providers.iter().position(|p| p.kind() == target_kind) {
                explicit_model_routing.insert(model_name.clone(), idx);
            }
        }

        Self {
            providers,
            explicit_model_routing,
            default_kind: config
                .default
                .as_deref()
                .and_then(ProviderKind::from_name)
                .unwrap_or_default(),
        }
    }

    /// Resolve the provider serving `model`.
    ///
    /// Routing priority:
    ///  1. explicit `[providers.routing]` entry for the model identifier
    ///  2. family inference: hosted chat models go to OpenAi, the rest to Local
    ///  3. the configured default provider
    ///  4. the first registered provider
    ///  5. `GatewayError::ModelNotAvailable` when nothing is registered
    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        if let Some(&idx) = self.explicit_model_routing.get(model.as_str()) {
            return Ok(self.providers[idx].as_ref());
        }

        let inferred_kind = match model.family() {
            ModelFamily::HostedChat => ProviderKind::OpenAi,
            _ => ProviderKind::Local,
        };
        if let Some(p) = self.providers.iter().find(|p| p.kind() == inferred_kind) {
            return Ok(p.as_ref());
        }

        if let Some(p) = self
            .providers
            .iter()
            .find(|p| p.kind() == self.default_kind)
        {
            return Ok(p.as_ref());
        }

        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or(GatewayError::ModelNotAvailable(
                "No providers available".to_string(),
            ))
    }

    /// Which backend would serve `model`, if any
    pub fn provider_for(&self, model: &Model) -> Option<ProviderKind> {
        self.resolve_provider(model).ok().map(|p| p.kind())
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        let provider = self.resolve_provider(model)?;
        debug!(model = %model, provider = %provider.kind(), "Routing session");
        provider.create_session(model).await
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        let mut all_models = Vec::new();
        for provider in &self.providers {
            if let Ok(models) = provider.available_models().await {
                all_models.extend(models);
            }
        }
        Ok(all_models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockProvider {
        kind: ProviderKind,
        models: Vec<Model>,
    }

    impl MockProvider {
        fn new(kind: ProviderKind) -> Arc<dyn ProviderAdapter> {
            Arc::new(Self {
                kind,
                models: vec![],
            })
        }

        fn with_models(kind: ProviderKind, models: Vec<Model>) -> Arc<dyn ProviderAdapter> {
            Arc::new(Self { kind, models })
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn supports_model(&self, _model: &Model) -> bool {
            true
        }

        async fn create_session(
            &self,
            _model: &Model,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Err(GatewayError::RequestFailed(self.kind.to_string()))
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(self.models.clone())
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn both() -> Vec<Arc<dyn ProviderAdapter>> {
        vec![
            MockProvider::new(ProviderKind::Local),
            MockProvider::new(ProviderKind::OpenAi),
        ]
    }

    fn config_with_default(default: &str) -> ProviderConfig {
        ProviderConfig {
            default: Some(default.to_string()),
            ..Default::default()
        }
    }

    // -- resolve_provider routing priority tests -------------------------------

    #[test]
    fn explicit_routing_takes_highest_priority() {
        // gpt-4o-mini would infer to OpenAi; the explicit route wins.
        let mut routing = HashMap::new();
        routing.insert("gpt-4o-mini".to_string(), "local".to_string());
        let config = ProviderConfig {
            routing,
            ..Default::default()
        };
        let gw = RoutingGateway::new(both(), &config);

        assert_eq!(gw.provider_for(&Model::Gpt4oMini), Some(ProviderKind::Local));
    }

    #[test]
    fn hosted_chat_model_infers_openai() {
        let gw = RoutingGateway::new(both(), &ProviderConfig::default());
        assert_eq!(
            gw.provider_for(&Model::Gpt4oMini),
            Some(ProviderKind::OpenAi)
        );
    }

    #[test]
    fn local_families_infer_local() {
        let gw = RoutingGateway::new(both(), &config_with_default("openai"));
        for model in [Model::FlanT5Small, Model::MistralGptq, Model::MistralGguf] {
            assert_eq!(gw.provider_for(&model), Some(ProviderKind::Local));
        }
    }

    #[test]
    fn falls_back_to_default_kind_when_inferred_provider_missing() {
        // A local model with no local adapter registered goes to the default.
        let providers = vec![MockProvider::new(ProviderKind::OpenAi)];
        let gw = RoutingGateway::new(providers, &config_with_default("openai"));

        assert_eq!(
            gw.provider_for(&Model::FlanT5Small),
            Some(ProviderKind::OpenAi)
        );
    }

    #[test]
    fn falls_back_to_first_provider() {
        // Default names a provider that is not registered.
        let providers = vec![MockProvider::new(ProviderKind::OpenAi)];
        let gw = RoutingGateway::new(providers, &config_with_default("local"));

        assert_eq!(
            gw.provider_for(&Model::MistralGguf),
            Some(ProviderKind::OpenAi)
        );
    }

    #[test]
    fn empty_providers_returns_model_not_available() {
        let gw = RoutingGateway::new(vec![], &ProviderConfig::default());

        let result = gw.resolve_provider(&Model::FlanT5Small);
        assert!(matches!(result, Err(GatewayError::ModelNotAvailable(_))));
        assert_eq!(gw.provider_for(&Model::FlanT5Small), None);
    }

    #[test]
    fn unknown_routing_provider_name_is_ignored() {
        let mut routing = HashMap::new();
        routing.insert("gpt-4o-mini".to_string(), "nonexistent-provider".to_string());
        let config = ProviderConfig {
            routing,
            ..Default::default()
        };
        let gw = RoutingGateway::new(both(), &config);

        assert!(gw.explicit_model_routing.is_empty());
    }

    #[test]
    fn unknown_default_falls_back_to_local() {
        let gw = RoutingGateway::new(both(), &config_with_default("anthropic"));
        assert_eq!(gw.default_kind, ProviderKind::Local);
    }

    // -- LlmGateway trait integration tests ------------------------------------

    #[tokio::test]
    async fn create_session_uses_resolved_provider() {
        let gw = RoutingGateway::new(both(), &ProviderConfig::default());
        match gw.create_session(&Model::Gpt4oMini).await {
            Err(GatewayError::RequestFailed(kind)) => assert_eq!(kind, "openai"),
            _ => panic!("expected the mock's error"),
        }
    }

    #[tokio::test]
    async fn available_models_aggregates_from_all_providers() {
        let providers = vec![
            MockProvider::with_models(
                ProviderKind::Local,
                vec![Model::FlanT5Small, Model::MistralGguf],
            ),
            MockProvider::with_models(ProviderKind::OpenAi, vec![Model::Gpt4oMini]),
        ];
        let gw = RoutingGateway::new(providers, &ProviderConfig::default());

        let models = gw.available_models().await.unwrap();
        assert_eq!(models.len(), 3);
        assert!(models.contains(&Model::FlanT5Small));
        assert!(models.contains(&Model::MistralGguf));
        assert!(models.contains(&Model::Gpt4oMini));
    }
}
