//! Observability for Reverie: tracing initialization and GenAI
//! semantic-convention span attribute constants.

pub mod genai_attrs;
pub mod tracing_setup;
