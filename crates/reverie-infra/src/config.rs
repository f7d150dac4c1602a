//! Environment-based service configuration.
//!
//! The generator credential is read once at startup and injected into the
//! client at construction time -- no ambient lookup inside the pipeline.
//! A missing credential does not prevent startup: each request that needs
//! it fails with a structured configuration error instead of a crash, so a
//! misdeployed instance still answers health probes and reports the fault
//! in a debuggable form.

use secrecy::SecretString;

/// Environment variable holding the generator credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the generator base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Default generator base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Resolved service configuration.
pub struct ServiceConfig {
    /// Generator credential; `None` when absent from the environment.
    pub api_key: Option<SecretString>,
    /// Model identifier to request.
    pub model: String,
    /// Generator base URL (overridable for tests and proxies).
    pub base_url: String,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: read_env(API_KEY_VAR).map(SecretString::from),
            model: DEFAULT_MODEL.to_string(),
            base_url: read_env(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Read an environment variable, treating invalid Unicode as absent --
/// credentials must be valid strings.
fn read_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => Some(val),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_missing_key_resolves_to_none() {
        // SAFETY: test-local variable name, removed before and never reused.
        unsafe { std::env::remove_var("REVERIE_TEST_ABSENT_KEY") };
        assert!(read_env("REVERIE_TEST_ABSENT_KEY").is_none());
    }

    #[test]
    fn test_present_key_is_wrapped() {
        // SAFETY: this test sets a uniquely named variable and removes it.
        unsafe { std::env::set_var("REVERIE_TEST_PRESENT_KEY", "sk-test") };
        let val = read_env("REVERIE_TEST_PRESENT_KEY").map(SecretString::from);
        assert_eq!(val.unwrap().expose_secret(), "sk-test");
        // SAFETY: removing the variable set above.
        unsafe { std::env::remove_var("REVERIE_TEST_PRESENT_KEY") };
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        // SAFETY: test-local variable, removed at the end.
        unsafe { std::env::set_var("REVERIE_TEST_EMPTY_KEY", "") };
        assert!(read_env("REVERIE_TEST_EMPTY_KEY").is_none());
        // SAFETY: removing the variable set above.
        unsafe { std::env::remove_var("REVERIE_TEST_EMPTY_KEY") };
    }

    #[test]
    fn test_builder_overrides() {
        let config = ServiceConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
        .with_model("gpt-5-mini".to_string())
        .with_base_url("http://localhost:8089/v1".to_string());

        assert_eq!(config.model, "gpt-5-mini");
        assert_eq!(config.base_url, "http://localhost:8089/v1");
    }
}
