//! Completion backend trait.

use async_trait::async_trait;
use questwright_core::{CompletionRequest, CompletionResponse};
use questwright_error::QuestwrightResult;

/// A backend that turns a completion request into text.
///
/// Implementations make exactly one attempt per call: no retries, no
/// streaming, no partial results.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Perform one completion.
    async fn complete(&self, req: &CompletionRequest) -> QuestwrightResult<CompletionResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}
