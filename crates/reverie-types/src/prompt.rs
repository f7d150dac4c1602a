//! Prompt package types for the generator call.
//!
//! A [`PromptPackage`] is the ordered three-message prompt sent to the
//! completion service: `system` (persona), `developer` (format contract),
//! `user` (interpolated dream payload). The order and role labels are part
//! of the wire contract and are fixed by the constructor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of a message in the generator prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    Developer,
    User,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::Developer => write!(f, "developer"),
            MessageRole::User => write!(f, "user"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "developer" => Ok(MessageRole::Developer),
            "user" => Ok(MessageRole::User),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single role-tagged message in the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: MessageRole,
    pub content: String,
}

/// The ordered three-message prompt sent to the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptPackage {
    pub messages: Vec<PromptMessage>,
}

impl PromptPackage {
    /// Assemble the package in the fixed system, developer, user order.
    pub fn new(system: String, developer: String, user: String) -> Self {
        Self {
            messages: vec![
                PromptMessage {
                    role: MessageRole::System,
                    content: system,
                },
                PromptMessage {
                    role: MessageRole::Developer,
                    content: developer,
                },
                PromptMessage {
                    role: MessageRole::User,
                    content: user,
                },
            ],
        }
    }

    /// The user-role message content, if present.
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display_round_trip() {
        for role in [MessageRole::System, MessageRole::Developer, MessageRole::User] {
            let parsed: MessageRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert!("assistant".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::Developer).unwrap();
        assert_eq!(json, "\"developer\"");
    }

    #[test]
    fn test_package_order_is_fixed() {
        let package = PromptPackage::new("s".into(), "d".into(), "u".into());
        let roles: Vec<MessageRole> = package.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::System, MessageRole::Developer, MessageRole::User]
        );
    }

    #[test]
    fn test_user_content_finds_user_message() {
        let package = PromptPackage::new("s".into(), "d".into(), "dream here".into());
        assert_eq!(package.user_content(), Some("dream here"));
    }
}
