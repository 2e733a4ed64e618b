use crate::{ChatCompletionRequest, ChatCompletionResponse, ClientConfig};
use async_trait::async_trait;
use questwright_core::{CompletionRequest, CompletionResponse, TokenUsage};
use questwright_error::{ConfigError, GenerationError, GenerationErrorKind, QuestwrightResult};
use questwright_interface::CompletionDriver;
use tracing::instrument;

/// Client for OpenAI-compatible chat completion endpoints.
///
/// Each call is a single POST. Failures are reported as-is; nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: ClientConfig) -> Self {
        tracing::debug!("Creating completion client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from `OPENAI_API_KEY` and `OPENAI_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the key is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let url = self.config.completions_url();
        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                GenerationError::new(GenerationErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to read error response body: {}", e);
                    String::new()
                }
            };
            tracing::error!(status = status.as_u16(), "Completion endpoint returned error");
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            };
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let result = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            GenerationError::new(GenerationErrorKind::Deserialization(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %req.model))]
    async fn complete(&self, req: &CompletionRequest) -> QuestwrightResult<CompletionResponse> {
        let response = self.chat_completion(&ChatCompletionRequest::from(req)).await?;

        let text = response
            .first_content()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?
            .to_string();

        Ok(CompletionResponse {
            text,
            model: response.model.clone().unwrap_or_else(|| req.model.clone()),
            usage: response
                .usage
                .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens)),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
