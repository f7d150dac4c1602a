use thiserror::Error;

/// Errors from validating an inbound reflection request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("dream text required")]
    DreamRequired,
}

/// Errors from the generator call or the handling of its response.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The credential needed to call the generator is absent from
    /// configuration. Checked before any HTTP attempt.
    #[error("missing {name} in environment configuration")]
    MissingCredential { name: &'static str },

    /// The HTTP call failed before any response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The generator answered with a non-success status. `body` is the raw
    /// response body, carried as diagnostic detail and never parsed.
    #[error("generator call failed: {body}")]
    Api { body: String },

    /// The generator answered successfully but the body did not parse as
    /// the expected payload shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Errors from the end-to-end reflection pipeline.
#[derive(Debug, Error)]
pub enum ReflectError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
