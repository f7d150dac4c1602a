//! Shared domain types for Reverie.
//!
//! This crate contains the core domain types used across the Reverie
//! service: dream requests, prompt packages, the canonical section table,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod dream;
pub mod error;
pub mod prompt;
pub mod section;
