//! Scene types that make up an adventure's structure.

use questwright_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One beat in the adventure's narrative order.
///
/// Serialized as its display label. `"Social Interaction"` is accepted as an
/// alias for [`SceneType::SocialEncounter`].
///
/// # Examples
///
/// ```
/// use questwright_core::SceneType;
///
/// let scene: SceneType = "boss fight".parse().unwrap();
/// assert_eq!(scene, SceneType::BossFight);
/// assert_eq!(scene.label(), "Boss Fight");
/// assert!("Dance Off".parse::<SceneType>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "String", into = "String")]
pub enum SceneType {
    /// Tactical or violent conflict
    Combat,
    /// Problem-solving
    Puzzle,
    /// Negotiation, influence or conversation
    SocialEncounter,
    /// Travel and discovery
    Exploration,
    /// Gathering clues and evidence
    Investigation,
    /// The climactic fight
    BossFight,
    /// An unexplained question at the heart of the scene
    Mystery,
    /// A hazard to detect, avoid or disarm
    Trap,
}

impl SceneType {
    /// Every scene type in form order.
    pub fn all() -> Vec<Self> {
        <Self as strum::IntoEnumIterator>::iter().collect()
    }

    /// Display label, as written into prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Combat => "Combat",
            Self::Puzzle => "Puzzle",
            Self::SocialEncounter => "Social Encounter",
            Self::Exploration => "Exploration",
            Self::Investigation => "Investigation",
            Self::BossFight => "Boss Fight",
            Self::Mystery => "Mystery",
            Self::Trap => "Trap",
        }
    }

    /// What a scene of this type must contain.
    pub fn constraint(self) -> &'static str {
        match self {
            Self::Combat => "must involve tactical or violent conflict.",
            Self::Puzzle => "must involve problem-solving.",
            Self::SocialEncounter => "must revolve around negotiation, influence, or conversation.",
            Self::Exploration => "must center on travel, discovery, and navigating the environment.",
            Self::Investigation => "must have the players gather clues, evidence, or testimony.",
            Self::BossFight => "must be a climactic, high-stakes battle.",
            Self::Mystery => "must build around an unanswered question the players work to solve.",
            Self::Trap => "must present a hazard the players can detect, avoid, or disarm.",
        }
    }
}

impl std::fmt::Display for SceneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SceneType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("Social Interaction") {
            return Ok(Self::SocialEncounter);
        }
        Self::all()
            .into_iter()
            .find(|scene| scene.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ValidationError::new(ValidationErrorKind::UnknownSceneType(value.to_string()))
            })
    }
}

impl TryFrom<String> for SceneType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SceneType> for String {
    fn from(scene: SceneType) -> Self {
        scene.label().to_string()
    }
}
