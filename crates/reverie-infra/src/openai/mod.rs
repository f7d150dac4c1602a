//! OpenAI Responses API generator backend.
//!
//! This module provides the [`OpenAiResponsesClient`] which implements the
//! [`GeneratorClient`](reverie_core::generator::GeneratorClient) trait
//! against the Responses endpoint (`/v1/responses`).

pub mod client;
pub mod types;

pub use client::OpenAiResponsesClient;
