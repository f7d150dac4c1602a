//! Dream request and reflection response types.
//!
//! A [`DreamRequest`] is produced by validating an untyped JSON body; it is
//! never deserialized directly, because the inbound contract requires a
//! specific error for a missing or non-string `dream` field rather than a
//! generic deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated reflection request.
///
/// `dream` is the dreamer's narration, verbatim. `context` is whatever the
/// caller sent under the `context` key (an object in the normal case);
/// it defaults to an empty object when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct DreamRequest {
    pub dream: String,
    pub context: Value,
}

impl DreamRequest {
    /// Create a request with an empty context object.
    pub fn new(dream: impl Into<String>) -> Self {
        Self {
            dream: dream.into(),
            context: Value::Object(serde_json::Map::new()),
        }
    }

    /// Create a request with an explicit context value.
    pub fn with_context(dream: impl Into<String>, context: Value) -> Self {
        Self {
            dream: dream.into(),
            context,
        }
    }
}

/// Outbound success payload: `{ "reflection": <text> }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionResponse {
    pub reflection: String,
}
