//! Model provider integration for Questwright.
//!
//! [`OpenAiClient`] speaks the OpenAI chat completions protocol and
//! implements [`questwright_interface::CompletionDriver`]. Any endpoint that
//! accepts the same request shape (a proxy, a local inference server) works
//! by pointing `base_url` at it.
//!
//! ```no_run
//! use questwright_models::OpenAiClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::from_env()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod dto;

pub use client::OpenAiClient;
pub use config::{API_KEY_ENV, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use dto::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, Message, Usage};
