//! Application state wiring the pipeline to its concrete backend.
//!
//! The service is generic over the generator trait; AppState pins it to
//! the OpenAI Responses client from reverie-infra.

use std::sync::Arc;

use reverie_core::service::ReflectionService;
use reverie_infra::config::ServiceConfig;
use reverie_infra::openai::OpenAiResponsesClient;

/// The service generic pinned to the concrete infra client.
pub type ConcreteReflectionService = ReflectionService<OpenAiResponsesClient>;

/// Shared application state holding the reflection service.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ConcreteReflectionService>,
}

impl AppState {
    /// Wire the pipeline from resolved configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let generator = OpenAiResponsesClient::new(config);
        Self {
            service: Arc::new(ReflectionService::new(generator)),
        }
    }
}
