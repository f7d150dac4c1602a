//! OpenAiResponsesClient -- concrete [`GeneratorClient`] for the OpenAI
//! Responses API.
//!
//! Sends the three-message prompt to `/responses` with bearer
//! authentication. The API key is wrapped in [`secrecy::SecretString`] and
//! is never logged or included in `Debug` output. The response body is
//! returned raw; status interpretation and parsing belong to the
//! normalizer.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use reverie_core::generator::{GeneratorClient, UpstreamResponse};
use reverie_types::error::GeneratorError;
use reverie_types::prompt::PromptPackage;

use crate::config::{ServiceConfig, API_KEY_VAR};

use super::types::ResponsesRequest;

/// OpenAI Responses API generator client.
///
/// # API Key Security
///
/// Does NOT derive Debug. The key is only exposed when constructing the
/// authorization header.
pub struct OpenAiResponsesClient {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl OpenAiResponsesClient {
    /// Create a client from resolved configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
            model: config.model,
        }
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl GeneratorClient for OpenAiResponsesClient {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn call(&self, package: &PromptPackage) -> Result<UpstreamResponse, GeneratorError> {
        // Credential check comes first: a misconfigured deployment must
        // fail structurally before any network attempt.
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(GeneratorError::MissingCredential { name: API_KEY_VAR })?;

        let body = ResponsesRequest::from_package(&self.model, package);
        let url = self.url("/responses");

        tracing::debug!(model = %self.model, "calling generator");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let ok = status.is_success();
        let raw_body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Transport(format!("failed to read body: {e}")))?;

        if !ok {
            tracing::warn!(%status, "generator returned failure status");
        }

        Ok(UpstreamResponse { ok, body: raw_body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(api_key: Option<&str>) -> OpenAiResponsesClient {
        OpenAiResponsesClient::new(ServiceConfig {
            api_key: api_key.map(SecretString::from),
            model: "gpt-5".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        })
    }

    #[test]
    fn test_client_name_and_model() {
        let client = make_client(Some("test-key-not-real"));
        assert_eq!(client.name(), "openai");
        assert_eq!(client.model(), "gpt-5");
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = make_client(Some("test-key-not-real"));
        assert_eq!(client.url("/responses"), "https://api.openai.com/v1/responses");
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_call() {
        let client = make_client(None);
        let package = PromptPackage::new("s".into(), "d".into(), "u".into());

        let err = client.call(&package).await.unwrap_err();

        match err {
            GeneratorError::MissingCredential { name } => assert_eq!(name, "OPENAI_API_KEY"),
            other => panic!("expected MissingCredential, got {other:?}"),
        }
    }
}
