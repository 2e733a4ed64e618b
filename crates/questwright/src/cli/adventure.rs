//! Request file command handlers.

use super::commands::OutputFormat;
use super::files::{load_config, read_request, write_file};
use questwright::{
    EstimateResponse, JsonError, OpenAiClient, OptionCatalog, PromptAssembler, QuestwrightResult,
    estimate_cost, export_document, generate_adventure,
};
use std::path::Path;
use tracing::{info, instrument};

/// Print the assembled prompt.
pub fn prompt(request: &Path, config: Option<&Path>) -> QuestwrightResult<()> {
    let config = load_config(config)?;
    let request = read_request(request, config.generation.max_scenes)?;

    println!("{}", PromptAssembler::default().assemble(&request));
    Ok(())
}

/// Print the token and cost estimate.
pub fn estimate(request: &Path, config: Option<&Path>, format: OutputFormat) -> QuestwrightResult<()> {
    let config = load_config(config)?;
    let request = read_request(request, config.generation.max_scenes)?;
    let profile = config.models.for_detail(request.detail_level);

    let response = EstimateResponse {
        estimate: estimate_cost(&request, profile),
        model: profile.model().clone(),
        max_tokens: *profile.max_tokens(),
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("Model:          {} (max {} tokens)", response.model, response.max_tokens);
            println!("Input tokens:   {}", response.estimate.input_tokens());
            println!("Output tokens:  {}", response.estimate.output_tokens());
            println!("Total tokens:   {}", response.estimate.total_tokens());
            println!("Estimated cost: ${:.4}", response.estimate.estimated_cost());
        }
    }

    Ok(())
}

/// Call the model and print or save the adventure.
#[instrument(skip_all, fields(request = %request.display()))]
pub async fn generate(
    request: &Path,
    config: Option<&Path>,
    output: Option<&Path>,
    html: Option<&Path>,
) -> QuestwrightResult<()> {
    let config = load_config(config)?;
    let request = read_request(request, config.generation.max_scenes)?;
    let client = OpenAiClient::new(config.provider.client_config()?);

    let adventure = generate_adventure(
        &client,
        &request,
        &config.models,
        config.generation.temperature,
    )
    .await?;

    match output {
        Some(path) => {
            write_file(path, adventure.text())?;
            info!(path = %path.display(), "Adventure saved");
        }
        None => println!("{}", adventure.text()),
    }

    if let Some(path) = html {
        let title = super::export::document_title(adventure.text())
            .unwrap_or_else(|| format!("{} One-Shot", request.theme));
        write_file(path, &export_document(&title, adventure.text()))?;
        info!(path = %path.display(), "HTML exported");
    }

    Ok(())
}

/// Print the option catalog.
pub fn options(config: Option<&Path>, format: OutputFormat) -> QuestwrightResult<()> {
    let config = load_config(config)?;
    let catalog = OptionCatalog::snapshot(config.generation.max_scenes);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&catalog)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            let lists = [
                ("Genres", &catalog.genres),
                ("World styles", &catalog.world_styles),
                ("Tones", &catalog.tones),
                ("Themes", &catalog.themes),
                ("Rulesets", &catalog.rulesets),
                ("Experience levels", &catalog.experience_levels),
                ("Scene types", &catalog.scene_types),
                ("Detail levels", &catalog.detail_levels),
            ];
            for (heading, labels) in lists {
                println!("{}:", heading);
                for label in labels {
                    println!("  - {}", label);
                }
            }
            println!(
                "Players: {}-{}, average level: {}-{}, scenes: up to {}",
                catalog.min_players,
                catalog.max_players,
                catalog.min_level,
                catalog.max_level,
                catalog.max_scenes
            );
        }
    }

    Ok(())
}
