//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the questwright binary.

mod adventure;
mod commands;
mod export;
mod files;
mod server;

pub use adventure::{estimate, generate, options, prompt};
pub use commands::{Cli, Commands};
pub use export::render;
pub use server::serve;
