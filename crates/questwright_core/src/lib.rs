//! Core data types for the Questwright adventure generator.
//!
//! This crate holds everything that is pure and deterministic:
//!
//! - **Option catalog**: the closed lists of genres, tones, rulesets and so on
//! - **Scene timeline**: a bounded, ordered list of scene types
//! - **Adventure request**: the immutable description of one generation
//! - **Cost estimator**: a linear token and price heuristic
//! - **Prompt assembler**: turns a request into the text sent to the model
//! - **Form reducer**: the submission state machine driven by UI actions
//!
//! Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod completion;
mod cost;
mod model;
mod prompt;
mod request;
mod scene;
mod session;
mod timeline;

pub use catalog::{
    CatalogOption, ExperienceLevel, Genre, LEVEL_RANGE, OptionCatalog, PLAYER_RANGE, Ruleset,
    Theme, Tone, WorldStyle, normalize_label,
};
pub use completion::{
    ChatMessage, CompletionRequest, CompletionResponse, GeneratedAdventure, Role, TokenUsage,
};
pub use cost::{
    CostEstimate, CostEstimator, DetailWeights, EstimatorWeights, ExperienceWeights, RulesetWeights,
    estimate_cost,
};
pub use model::{ModelProfile, ModelSelection};
pub use prompt::{
    DIALOGUE_INSTRUCTION, NO_STATBLOCKS_INSTRUCTION, PUZZLE_INSTRUCTION, PromptAssembler,
    STATBLOCK_INSTRUCTION, SceneListStyle, build_completion_request,
};
pub use request::{
    AdventureRequest, AdventureRequestBuilder, AdventureRequestBuilderError, DEFAULT_MAX_SCENES,
    DetailLevel, FeatureFlags,
};
pub use scene::SceneType;
pub use session::{FormAction, FormState, SubmissionState, reduce};
pub use timeline::SceneTimeline;
