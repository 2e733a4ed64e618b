//! Linear token and cost estimate shown next to the form.
//!
//! The estimate is advisory. It is computed from the request alone, before
//! any prompt is built, and never gates submission.

use crate::{
    AdventureRequest, CatalogOption, DetailLevel, ExperienceLevel, ModelProfile, Ruleset,
};
use serde::Serialize;

/// Estimated token usage and price for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// Tokens in the prompt.
    input_tokens: u64,
    /// Tokens expected in the response.
    output_tokens: u64,
    /// Input plus output.
    total_tokens: u64,
    /// USD, rounded to four decimal places.
    estimated_cost: f64,
}

impl CostEstimate {
    /// Build an estimate from token counts and per-thousand prices.
    pub fn from_tokens(
        input_tokens: u64,
        output_tokens: u64,
        input_cost_per_thousand: f64,
        output_cost_per_thousand: f64,
    ) -> Self {
        let input_cost = (input_tokens as f64 / 1000.0) * input_cost_per_thousand;
        let output_cost = (output_tokens as f64 / 1000.0) * output_cost_per_thousand;
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
            estimated_cost: round_to_four_places(input_cost + output_cost),
        }
    }
}

fn round_to_four_places(amount: f64) -> f64 {
    (amount * 10_000.0).round() / 10_000.0
}

/// Token weights for each part of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorWeights {
    /// Fixed prompt overhead.
    pub base: u64,
    /// Per party member.
    pub per_player: u64,
    /// Per average character level.
    pub per_level: u64,
    /// Per scene in the structure.
    pub per_scene: u64,
    /// Each of genre, theme, tone and world style when non-blank.
    pub per_setting_field: u64,
    /// Dialogue instruction.
    pub dialogue: u64,
    /// Statblock template.
    pub statblocks: u64,
    /// Puzzle instruction.
    pub puzzles: u64,
    /// Novice, intermediate and expert guidance.
    pub experience: ExperienceWeights,
    /// Ruleset-specific instructions.
    pub ruleset: RulesetWeights,
    /// Low, medium and high prose density.
    pub detail: DetailWeights,
    /// Completion tokens per prompt token.
    pub output_ratio: f64,
}

impl Default for EstimatorWeights {
    fn default() -> Self {
        Self {
            base: 300,
            per_player: 15,
            per_level: 5,
            per_scene: 40,
            per_setting_field: 10,
            dialogue: 60,
            statblocks: 120,
            puzzles: 80,
            experience: ExperienceWeights::default(),
            ruleset: RulesetWeights::default(),
            detail: DetailWeights::default(),
            output_ratio: 2.2,
        }
    }
}

/// Tokens added per recognized experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceWeights {
    /// Novice party.
    pub novice: u64,
    /// Intermediate party.
    pub intermediate: u64,
    /// Expert party.
    pub expert: u64,
}

impl Default for ExperienceWeights {
    fn default() -> Self {
        Self {
            novice: 40,
            intermediate: 25,
            expert: 10,
        }
    }
}

impl ExperienceWeights {
    /// Unrecognized labels contribute nothing.
    pub fn lookup(&self, label: &str) -> u64 {
        match ExperienceLevel::parse(label) {
            Some(ExperienceLevel::Novice) => self.novice,
            Some(ExperienceLevel::Intermediate) => self.intermediate,
            Some(ExperienceLevel::Expert) => self.expert,
            None => 0,
        }
    }
}

/// Tokens added per recognized ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesetWeights {
    /// 5e and D&D One.
    pub dnd: u64,
    /// Pathfinder.
    pub pathfinder: u64,
    /// Custom or homebrew rules.
    pub custom: u64,
}

impl Default for RulesetWeights {
    fn default() -> Self {
        Self {
            dnd: 20,
            pathfinder: 35,
            custom: 50,
        }
    }
}

impl RulesetWeights {
    /// Unrecognized labels contribute nothing.
    pub fn lookup(&self, label: &str) -> u64 {
        match Ruleset::parse(label) {
            Some(Ruleset::FifthEdition) | Some(Ruleset::DndOne) => self.dnd,
            Some(Ruleset::Pathfinder) => self.pathfinder,
            Some(Ruleset::Custom) => self.custom,
            None => 0,
        }
    }
}

/// Tokens added per detail level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailWeights {
    /// Low detail.
    pub low: u64,
    /// Medium detail.
    pub medium: u64,
    /// High detail.
    pub high: u64,
}

impl Default for DetailWeights {
    fn default() -> Self {
        Self {
            low: 50,
            medium: 120,
            high: 300,
        }
    }
}

impl DetailWeights {
    /// Tokens for the given level.
    pub fn lookup(&self, level: DetailLevel) -> u64 {
        match level {
            DetailLevel::Low => self.low,
            DetailLevel::Medium => self.medium,
            DetailLevel::High => self.high,
        }
    }
}

/// Deterministic cost estimator.
///
/// # Examples
///
/// ```
/// use questwright_core::{CostEstimator, ModelProfile, AdventureRequest, SceneType};
///
/// let request = AdventureRequest::builder()
///     .genre("High Fantasy")
///     .tone("Grim")
///     .world_style("Low Magic")
///     .ruleset("5e")
///     .experience_level("Expert")
///     .theme("Survival")
///     .number_of_players(3u32)
///     .average_player_level(2u32)
///     .structure(vec![SceneType::Exploration])
///     .build()
///     .unwrap();
///
/// let estimate = CostEstimator::default().estimate(&request, &ModelProfile::standard());
/// assert!(*estimate.input_tokens() > 300);
/// assert_eq!(*estimate.total_tokens(), estimate.input_tokens() + estimate.output_tokens());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostEstimator {
    weights: EstimatorWeights,
}

impl CostEstimator {
    /// Create an estimator with custom weights.
    pub fn new(weights: EstimatorWeights) -> Self {
        Self { weights }
    }

    /// Estimated prompt tokens for the request.
    pub fn input_tokens(&self, request: &AdventureRequest) -> u64 {
        let w = &self.weights;

        let setting_fields = [
            &request.genre,
            &request.theme,
            &request.tone,
            &request.world_style,
        ]
        .into_iter()
        .filter(|field| !field.trim().is_empty())
        .count() as u64;

        let flags = &request.features;
        let feature_tokens = if flags.dialogue { w.dialogue } else { 0 }
            + if flags.statblocks { w.statblocks } else { 0 }
            + if flags.puzzles { w.puzzles } else { 0 };

        // Roughly four characters per sub-word token.
        let notes_tokens = request
            .extra_notes
            .as_deref()
            .map(|notes| notes.chars().count().div_ceil(4) as u64)
            .unwrap_or(0);

        w.base
            + w.per_player * u64::from(request.number_of_players)
            + w.per_level * u64::from(request.average_player_level)
            + w.experience.lookup(&request.experience_level)
            + w.ruleset.lookup(&request.ruleset)
            + w.per_setting_field * setting_fields
            + w.detail.lookup(request.detail_level)
            + feature_tokens
            + w.per_scene * request.structure.len() as u64
            + notes_tokens
    }

    /// Estimate tokens and price using the profile's rates.
    #[tracing::instrument(skip_all, fields(model = %profile.model()))]
    pub fn estimate(&self, request: &AdventureRequest, profile: &ModelProfile) -> CostEstimate {
        let input_tokens = self.input_tokens(request);
        let output_tokens = (input_tokens as f64 * self.weights.output_ratio).round() as u64;
        let estimate = CostEstimate::from_tokens(
            input_tokens,
            output_tokens,
            *profile.input_cost_per_thousand(),
            *profile.output_cost_per_thousand(),
        );
        tracing::debug!(
            input_tokens,
            output_tokens,
            cost = estimate.estimated_cost,
            "Estimated generation cost"
        );
        estimate
    }
}

/// Estimate with the default weights.
pub fn estimate_cost(request: &AdventureRequest, profile: &ModelProfile) -> CostEstimate {
    CostEstimator::default().estimate(request, profile)
}
