//! HTTP request handlers.

pub mod dream;
