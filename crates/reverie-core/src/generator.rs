//! GeneratorClient trait definition.
//!
//! The seam between the pipeline and the completion service. The concrete
//! HTTP client lives in reverie-infra; tests substitute a stub. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition).

use reverie_types::error::GeneratorError;
use reverie_types::prompt::PromptPackage;

/// The generator's answer, unparsed.
///
/// `ok` is the HTTP-level success indicator; `body` is the raw response
/// text. Interpreting the body -- including whether it parses at all --
/// is the normalizer's job, so a failure body can be carried through as
/// diagnostic detail without any parse attempt.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub ok: bool,
    pub body: String,
}

/// Trait for the text-generation backend.
pub trait GeneratorClient: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Model identifier the client will request.
    fn model(&self) -> &str;

    /// Send the prompt package and return the raw response.
    ///
    /// Implementations must fail with
    /// [`GeneratorError::MissingCredential`] before attempting any network
    /// call when the credential is absent, and with
    /// [`GeneratorError::Transport`] when no response was received at all.
    /// A received response is returned as an [`UpstreamResponse`] whatever
    /// its status.
    fn call(
        &self,
        package: &PromptPackage,
    ) -> impl std::future::Future<Output = Result<UpstreamResponse, GeneratorError>> + Send;
}
