//! Questwright - one-shot tabletop adventure generator
//!
//! Questwright turns a handful of table settings (genre, tone, ruleset, party,
//! an ordered list of scene types) into a single instruction prompt, sends it
//! to a chat completion model and returns the adventure as markdown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use questwright::{
//!     AdventureRequest, ModelSelection, OpenAiClient, SceneType, generate_adventure,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::from_env()?;
//!
//!     let request = AdventureRequest::builder()
//!         .genre("High Fantasy")
//!         .tone("Dark")
//!         .world_style("Standard Fantasy")
//!         .ruleset("5e")
//!         .experience_level("Novice")
//!         .theme("Undead Invasion")
//!         .number_of_players(4u32)
//!         .average_player_level(5u32)
//!         .structure(vec![SceneType::Combat, SceneType::Puzzle])
//!         .build()?;
//!
//!     let adventure =
//!         generate_adventure(&client, &request, &ModelSelection::default(), 0.7).await?;
//!     println!("{}", adventure.text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `questwright-error` - Error types
//! - `questwright-core` - Option catalog, scene timeline, cost estimator, prompt assembler
//! - `questwright-interface` - `CompletionDriver` trait and the generation lifecycle
//! - `questwright-models` - OpenAI-compatible client
//! - `questwright-server` - HTTP service and configuration
//!
//! This crate (`questwright`) re-exports everything for convenience and adds
//! markdown export.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod observability;
pub mod render;

pub use observability::{LoggingConfig, init_logging};
pub use render::{export_document, markdown_to_html};

pub use questwright_core::*;
pub use questwright_error::*;
pub use questwright_interface::*;
pub use questwright_models::*;
pub use questwright_server::*;
