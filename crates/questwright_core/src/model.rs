//! Model profiles and the static detail-level model selection.

use crate::DetailLevel;
use serde::{Deserialize, Serialize};

/// A completion model together with its output ceiling and pricing.
///
/// Prices are in USD per thousand tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct ModelProfile {
    /// Model identifier sent to the API.
    model: String,

    /// Maximum output tokens requested.
    max_tokens: u32,

    /// USD per thousand prompt tokens.
    #[serde(default)]
    input_cost_per_thousand: f64,

    /// USD per thousand completion tokens.
    #[serde(default)]
    output_cost_per_thousand: f64,
}

impl ModelProfile {
    /// Create a profile.
    pub fn new(
        model: impl Into<String>,
        max_tokens: u32,
        input_cost_per_thousand: f64,
        output_cost_per_thousand: f64,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            input_cost_per_thousand,
            output_cost_per_thousand,
        }
    }

    /// The smaller, cheaper model used for low and medium detail.
    pub fn standard() -> Self {
        Self::new("gpt-3.5-turbo", 3000, 0.0005, 0.0015)
    }

    /// The larger model used for high detail.
    pub fn detailed() -> Self {
        Self::new("gpt-4o", 8000, 0.005, 0.015)
    }

    /// Validates that prices are non-negative and the ceiling is non-zero.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model identifier must not be empty".to_string());
        }
        if self.max_tokens == 0 {
            return Err(format!("max_tokens for {} must be positive", self.model));
        }
        if self.input_cost_per_thousand < 0.0 || self.output_cost_per_thousand < 0.0 {
            return Err(format!("prices for {} must not be negative", self.model));
        }
        Ok(())
    }
}

/// The two-way model branch: high detail gets the detailed profile,
/// everything else the standard one.
///
/// # Examples
///
/// ```
/// use questwright_core::{DetailLevel, ModelSelection};
///
/// let selection = ModelSelection::default();
/// assert_eq!(selection.for_detail(DetailLevel::High).model(), "gpt-4o");
/// assert_eq!(*selection.for_detail(DetailLevel::Low).max_tokens(), 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ModelSelection {
    /// Profile for low and medium detail.
    standard: ModelProfile,
    /// Profile for high detail.
    detailed: ModelProfile,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            standard: ModelProfile::standard(),
            detailed: ModelProfile::detailed(),
        }
    }
}

impl ModelSelection {
    /// Create a selection from two profiles.
    pub fn new(standard: ModelProfile, detailed: ModelProfile) -> Self {
        Self { standard, detailed }
    }

    /// Profile for the given detail level.
    pub fn for_detail(&self, level: DetailLevel) -> &ModelProfile {
        match level {
            DetailLevel::High => &self.detailed,
            DetailLevel::Low | DetailLevel::Medium => &self.standard,
        }
    }

    /// Validates both profiles.
    ///
    /// # Errors
    ///
    /// Returns the first profile error found.
    pub fn validate(&self) -> Result<(), String> {
        self.standard.validate()?;
        self.detailed.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_uses_standard_profile() {
        let selection = ModelSelection::default();
        assert_eq!(
            selection.for_detail(DetailLevel::Medium),
            &ModelProfile::standard()
        );
    }

    #[test]
    fn validate_rejects_bad_profiles() {
        assert!(ModelProfile::new("", 100, 0.0, 0.0).validate().is_err());
        assert!(ModelProfile::new("m", 0, 0.0, 0.0).validate().is_err());
        assert!(ModelProfile::new("m", 10, -1.0, 0.0).validate().is_err());
        assert!(ModelSelection::default().validate().is_ok());
    }
}
