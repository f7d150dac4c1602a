//! The end-to-end reflection pipeline.
//!
//! Validate, build the prompt, call the generator, normalize. Each
//! invocation is stateless and independent; the service holds nothing but
//! the generator client and may be shared across concurrent requests.

use serde_json::Value;

use reverie_types::error::ReflectError;

use crate::generator::GeneratorClient;
use crate::{normalize, prompt};

/// Request-scoped reflection pipeline, generic over the generator backend.
pub struct ReflectionService<G: GeneratorClient> {
    generator: G,
}

impl<G: GeneratorClient> ReflectionService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Provider name of the underlying generator, for instrumentation.
    pub fn provider(&self) -> &str {
        self.generator.name()
    }

    /// Model the underlying generator will request, for instrumentation.
    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Run one reflection request from untyped body to normalized text.
    ///
    /// Validation failures surface before the generator is contacted.
    pub async fn reflect(&self, body: &Value) -> Result<String, ReflectError> {
        let request = prompt::validate(body)?;
        let package = prompt::build_prompt(&request);

        tracing::debug!(
            dream_chars = request.dream.len(),
            "dispatching reflection prompt"
        );

        let response = self.generator.call(&package).await?;
        let reflection = normalize::normalize(&response)?;

        Ok(reflection)
    }
}
