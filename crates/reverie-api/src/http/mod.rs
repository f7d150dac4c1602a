//! HTTP API layer for Reverie.
//!
//! Axum-based single-endpoint API with CORS support and structured JSON
//! errors -- callers always receive JSON, never a bare trace.

pub mod error;
pub mod handlers;
pub mod router;
