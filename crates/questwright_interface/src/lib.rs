//! Trait definitions for Questwright completion backends.
//!
//! The [`CompletionDriver`] trait is the seam between prompt assembly and
//! whatever serves completions. [`generate_adventure`] runs one submission
//! end to end against any driver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generate;
mod traits;

pub use generate::generate_adventure;
pub use traits::CompletionDriver;
