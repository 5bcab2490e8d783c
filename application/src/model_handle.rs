//! Lazily-initialized model session handle.
//!
//! A [`ModelHandle`] owns the session for one model. The session is created
//! on first use and shared read-only afterwards, so repeated generate
//! actions (e.g. in the interactive loop) load the model once.
//! The handle is constructed by the caller and injected into use cases.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use mcq_domain::Model;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Load-once, reuse-many owner of a backend session
pub struct ModelHandle<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    session: OnceCell<Box<dyn LlmSession>>,
}

impl<G: LlmGateway + 'static> ModelHandle<G> {
    pub fn new(gateway: Arc<G>, model: Model) -> Self {
        Self {
            gateway,
            model,
            session: OnceCell::new(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Whether the session has already been created
    pub fn is_loaded(&self) -> bool {
        self.session.initialized()
    }

    /// Get the session, creating it on first call.
    ///
    /// A failed creation leaves the handle empty; the next call retries.
    pub async fn session(&self) -> Result<&dyn LlmSession, GatewayError> {
        let session = self
            .session
            .get_or_try_init(|| async {
                info!(model = %self.model, "Loading model session");
                self.gateway.create_session(&self.model).await
            })
            .await?;
        Ok(session.as_ref())
    }
}
