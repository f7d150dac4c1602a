//! OpenAI Responses API request types.
//!
//! These are wire structures for HTTP communication with the Responses
//! endpoint -- NOT the provider-agnostic prompt types from reverie-types.
//! The response side is deliberately absent: the raw body is handed to the
//! normalizer unparsed, so failure bodies survive as diagnostics.

use serde::Serialize;

use reverie_types::prompt::PromptPackage;

/// Request body for the Responses endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
}

/// A single role-tagged input message.
#[derive(Debug, Clone, Serialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

impl ResponsesRequest {
    /// Build the wire request from a prompt package.
    pub fn from_package(model: &str, package: &PromptPackage) -> Self {
        Self {
            model: model.to_string(),
            input: package
                .messages
                .iter()
                .map(|m| InputMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_three_lowercase_roles() {
        let package = PromptPackage::new("s".into(), "d".into(), "u".into());
        let request = ResponsesRequest::from_package("gpt-5", &package);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-5");
        let input = value["input"].as_array().unwrap();
        assert_eq!(input.len(), 3);
        assert_eq!(input[0]["role"], "system");
        assert_eq!(input[1]["role"], "developer");
        assert_eq!(input[2]["role"], "user");
        assert_eq!(input[2]["content"], "u");
    }
}
