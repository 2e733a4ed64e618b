//! Questwright CLI binary.
//!
//! This binary provides command-line access to Questwright's functionality:
//! - Serve the HTTP API
//! - Print prompts and cost estimates for a request file
//! - Generate an adventure and export it as HTML

use clap::Parser;
use questwright::{LoggingConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, estimate, generate, options, prompt, render, serve};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logging(LoggingConfig::from_verbosity(cli.verbose).with_json_logs(cli.json_logs))?;

    match cli.command {
        Commands::Serve { host, port, config } => {
            serve(config.as_deref(), host, port).await?;
        }

        Commands::Prompt { request, config } => {
            prompt(&request, config.as_deref())?;
        }

        Commands::Estimate {
            request,
            config,
            format,
        } => {
            estimate(&request, config.as_deref(), format)?;
        }

        Commands::Generate {
            request,
            config,
            output,
            html,
        } => {
            generate(&request, config.as_deref(), output.as_deref(), html.as_deref()).await?;
        }

        Commands::Options { config, format } => {
            options(config.as_deref(), format)?;
        }

        Commands::Render {
            input,
            output,
            title,
        } => {
            render(&input, output.as_deref(), title.as_deref())?;
        }
    }

    Ok(())
}
