//! Business logic for Reverie.
//!
//! Two request-scoped transforms make up the pipeline: the prompt builder
//! ([`prompt`]) shapes a validated dream request into the three-message
//! generator prompt, and the normalizer ([`normalize`]) repairs the
//! generator's raw output into the canonical reflection format. The
//! [`generator`] module defines the trait seam the infrastructure client
//! implements; [`service`] wires the pieces together.

pub mod generator;
pub mod normalize;
pub mod prompt;
pub mod service;
