//! The adventure request submitted by the form.

use crate::SceneType;
use questwright_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Timeline capacity used when no configuration overrides it.
pub const DEFAULT_MAX_SCENES: usize = 15;

/// How much prose each scene should carry.
///
/// Parsing is case-insensitive and never fails: anything unrecognized,
/// including a JSON `null` or number, becomes [`DetailLevel::Medium`].
///
/// # Examples
///
/// ```
/// use questwright_core::DetailLevel;
///
/// assert_eq!(DetailLevel::from("HIGH"), DetailLevel::High);
/// assert_eq!(DetailLevel::from("extreme"), DetailLevel::Medium);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::EnumIter,
)]
#[serde(into = "String")]
pub enum DetailLevel {
    /// A few sentences per scene
    Low,
    /// Moderate prose with DCs and NPCs
    #[default]
    Medium,
    /// Rich prose, selects the larger model
    High,
}

impl DetailLevel {
    /// Every level, lowest first.
    pub fn all() -> Vec<Self> {
        <Self as strum::IntoEnumIterator>::iter().collect()
    }

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DetailLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl From<String> for DetailLevel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl<'de> Deserialize<'de> for DetailLevel {
    /// Accepts any value. Non-string values read as [`DetailLevel::Medium`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(label) => Self::from(label.as_str()),
            _ => Self::Medium,
        })
    }
}

impl From<DetailLevel> for String {
    fn from(level: DetailLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Optional content the prompt should ask for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Short NPC dialogue snippets
    #[serde(rename = "includeDialogue", default)]
    pub dialogue: bool,
    /// Stat blocks for combat encounters
    #[serde(rename = "includeStatblocks", default)]
    pub statblocks: bool,
    /// At least one puzzle, trap or ritual
    #[serde(rename = "includePuzzles", default)]
    pub puzzles: bool,
}

/// Everything needed to build one prompt.
///
/// Genre, tone, world style, ruleset, experience level and theme are free
/// text: catalog values get table lookups, anything else passes through.
///
/// # Examples
///
/// ```
/// use questwright_core::{AdventureRequest, SceneType};
///
/// let request = AdventureRequest::builder()
///     .genre("High Fantasy")
///     .tone("Lighthearted")
///     .world_style("Magic-Rich")
///     .ruleset("5e")
///     .experience_level("Novice")
///     .theme("Undead Invasion")
///     .number_of_players(4u32)
///     .average_player_level(5u32)
///     .structure(vec![SceneType::Combat, SceneType::Puzzle])
///     .build()
///     .unwrap();
///
/// assert!(request.validate(15).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct AdventureRequest {
    /// Genre label
    pub genre: String,
    /// Tone label
    pub tone: String,
    /// World style label
    pub world_style: String,
    /// Ruleset label
    pub ruleset: String,
    /// Player experience label
    pub experience_level: String,
    /// Theme label
    pub theme: String,
    /// Party size
    #[serde(alias = "numPlayers")]
    pub number_of_players: u32,
    /// Average character level
    pub average_player_level: u32,
    /// Scenes in narrative order
    #[serde(alias = "sceneBlocks")]
    #[builder(default)]
    pub structure: Vec<SceneType>,
    /// Free-text notes passed to the model verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub extra_notes: Option<String>,
    /// Prose density
    #[serde(default)]
    #[builder(default)]
    pub detail_level: DetailLevel,
    /// Optional content toggles
    #[serde(flatten)]
    #[builder(default)]
    pub features: FeatureFlags,
}

impl AdventureRequest {
    /// Creates a new request builder.
    pub fn builder() -> AdventureRequestBuilder {
        AdventureRequestBuilder::default()
    }

    /// Parse a submitted JSON body.
    ///
    /// The scene structure is checked first: a body whose `structure` (or
    /// `sceneBlocks`, ignored when both are present) is missing or not a list is rejected with
    /// [`ValidationErrorKind::MissingSceneStructure`], and an unknown scene
    /// label is reported by name. Remaining shape problems become
    /// [`ValidationErrorKind::MalformedBody`].
    #[tracing::instrument(skip_all)]
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        let scenes = value.get("structure").or_else(|| value.get("sceneBlocks"));
        let Some(serde_json::Value::Array(items)) = scenes else {
            tracing::debug!("Submission has no scene list");
            return Err(ValidationError::new(
                ValidationErrorKind::MissingSceneStructure,
            ));
        };

        let prefer_structure =
            value.get("structure").is_some() && value.get("sceneBlocks").is_some();

        for item in items {
            let serde_json::Value::String(label) = item else {
                return Err(ValidationError::new(
                    ValidationErrorKind::MissingSceneStructure,
                ));
            };
            label.parse::<SceneType>()?;
        }

        let mut value = value;
        if prefer_structure {
            if let Some(fields) = value.as_object_mut() {
                fields.remove("sceneBlocks");
            }
        }

        serde_json::from_value(value).map_err(|e| {
            ValidationError::new(ValidationErrorKind::MalformedBody(e.to_string()))
        })
    }

    /// Parse a JSON document, as read from a file or request body.
    pub fn from_json_str(body: &str) -> Result<Self, ValidationError> {
        let value = serde_json::from_str(body).map_err(|e| {
            ValidationError::new(ValidationErrorKind::MalformedBody(e.to_string()))
        })?;
        Self::from_json_value(value)
    }

    /// Check numeric bounds and the timeline capacity.
    pub fn validate(&self, max_scenes: usize) -> Result<(), ValidationError> {
        if self.number_of_players < 1 {
            return Err(ValidationError::new(ValidationErrorKind::InvalidField {
                field: "numberOfPlayers".to_string(),
                reason: "must be at least 1".to_string(),
            }));
        }
        if self.average_player_level < 1 {
            return Err(ValidationError::new(ValidationErrorKind::InvalidField {
                field: "averagePlayerLevel".to_string(),
                reason: "must be at least 1".to_string(),
            }));
        }
        if self.structure.len() > max_scenes {
            return Err(ValidationError::new(ValidationErrorKind::TooManyScenes {
                count: self.structure.len(),
                max: max_scenes,
            }));
        }
        Ok(())
    }

    /// Notes, if any non-whitespace text was supplied.
    pub fn notes(&self) -> Option<&str> {
        self.extra_notes
            .as_deref()
            .filter(|notes| !notes.trim().is_empty())
    }
}
