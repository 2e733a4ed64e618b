//! Error types for the Questwright adventure generator.
//!
//! This crate provides the foundation error types used throughout the Questwright workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Validation errors describe a bad submission and are safe to show to the caller.
//! Generation errors describe a failed call to the model API and are logged, never
//! echoed back verbatim.
//!
//! # Examples
//!
//! ```
//! use questwright_error::{QuestwrightResult, ValidationError, ValidationErrorKind};
//!
//! fn check_players(count: u32) -> QuestwrightResult<u32> {
//!     if count == 0 {
//!         Err(ValidationError::new(ValidationErrorKind::InvalidField {
//!             field: "numberOfPlayers".to_string(),
//!             reason: "must be at least 1".to_string(),
//!         }))?
//!     }
//!     Ok(count)
//! }
//!
//! assert!(check_players(0).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod http;
mod json;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{QuestwrightError, QuestwrightErrorKind, QuestwrightResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
