//! HTTP service for the Questwright adventure generator.
//!
//! Exposes the generate and estimate endpoints over axum, along with the
//! option catalog and a health check. The completion backend is injected as
//! an `Arc<dyn CompletionDriver>`, so tests can run the full router against a
//! scripted driver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod server;

pub use api::{AppState, EstimateResponse, GENERATION_FAILED, METHOD_NOT_ALLOWED, create_router};
pub use config::{GenerationSettings, ProviderSettings, QuestwrightConfig, ServerSettings};
pub use server::serve;
