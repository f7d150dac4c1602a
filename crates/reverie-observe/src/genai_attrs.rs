//! OpenTelemetry GenAI Semantic Convention attribute constants.
//!
//! These follow the OTel GenAI Semantic Conventions specification for
//! consistent LLM call instrumentation. The attribute names are written
//! inline as dotted field names in `tracing::span!` macros; the value
//! constants below keep the operation and provider strings in one place.
//!
//! Span naming convention: `"{operation} {model}"` (e.g., `"reflect gpt-5"`)

// --- Attribute names ---

/// The name of the operation being performed (e.g., "reflect").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider (e.g., "openai").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

/// The model ID requested (e.g., "gpt-5").
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

// --- Operation name values ---

/// Dream reflection operation.
pub const OP_REFLECT: &str = "reflect";

// --- Provider name values ---

/// OpenAI provider identifier.
pub const PROVIDER_OPENAI: &str = "openai";
