//! One submission, end to end.

use crate::CompletionDriver;
use questwright_core::{AdventureRequest, GeneratedAdventure, ModelSelection, build_completion_request};
use questwright_error::{GenerationError, GenerationErrorKind, QuestwrightResult};
use tracing::{debug, info, instrument};

/// Assemble the prompt, call the driver once and check the text is non-empty.
///
/// The request is assumed to be validated already.
///
/// # Errors
///
/// Returns the driver's error unchanged, or
/// [`GenerationErrorKind::EmptyResponse`] when the model answers with
/// nothing but whitespace.
#[instrument(
    skip_all,
    fields(provider = driver.provider_name(), detail = %request.detail_level)
)]
pub async fn generate_adventure(
    driver: &dyn CompletionDriver,
    request: &AdventureRequest,
    selection: &ModelSelection,
    temperature: f32,
) -> QuestwrightResult<GeneratedAdventure> {
    let completion = build_completion_request(request, selection, temperature);
    debug!(
        model = %completion.model,
        max_tokens = completion.max_tokens,
        prompt_len = completion.prompt_len(),
        "Sending completion request"
    );

    let response = driver.complete(&completion).await?;

    let adventure = GeneratedAdventure::new(response.text, response.model)
        .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

    info!(model = %adventure.model(), chars = adventure.text().len(), "Adventure generated");
    Ok(adventure)
}
