//! Reverie HTTP application library.
//!
//! Exposes the router and state wiring so integration tests (and embedders)
//! can mount the API against an arbitrary listener; the `reverie` binary in
//! `main.rs` is a thin CLI wrapper around these pieces.

pub mod http;
pub mod state;
