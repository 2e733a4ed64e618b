//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Questwright - one-shot tabletop adventure generator
#[derive(Parser, Debug)]
#[command(name = "questwright")]
#[command(about = "Generate one-shot tabletop adventures from a structured request", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Bind address (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides configuration)
        #[arg(long)]
        port: Option<u16>,

        /// Configuration file layered over the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the prompt a request file would send
    Prompt {
        /// Path to the request JSON
        request: PathBuf,

        /// Configuration file layered over the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Estimate tokens and cost for a request file
    Estimate {
        /// Path to the request JSON
        request: PathBuf,

        /// Configuration file layered over the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate an adventure from a request file
    Generate {
        /// Path to the request JSON
        request: PathBuf,

        /// Configuration file layered over the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the markdown here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also export a print-ready HTML document
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// List every option the request form accepts
    Options {
        /// Configuration file layered over the bundled defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Convert an adventure markdown file to standalone HTML
    Render {
        /// Path to the markdown file
        input: PathBuf,

        /// Write the HTML here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Document title (defaults to the first heading)
        #[arg(long)]
        title: Option<String>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
