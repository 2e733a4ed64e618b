//! Static option lists offered by the adventure form.
//!
//! Request fields stay free text so that custom values reach the prompt
//! verbatim. These enums exist for lookups (cost tables, label
//! normalization) and to publish the form's choices.

use crate::{DetailLevel, SceneType};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Player counts offered by the party form.
pub const PLAYER_RANGE: RangeInclusive<u32> = 1..=10;

/// Average character levels offered by the party form.
pub const LEVEL_RANGE: RangeInclusive<u32> = 1..=20;

/// A closed list of labelled choices.
pub trait CatalogOption: Copy + Sized + 'static {
    /// Display label shown in the form and written into prompts.
    fn label(self) -> &'static str;

    /// Case-insensitive lookup by label.
    fn parse(value: &str) -> Option<Self>;
}

macro_rules! labelled_options {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every option in form order.
            pub fn all() -> Vec<Self> {
                <Self as strum::IntoEnumIterator>::iter().collect()
            }

            /// Labels in form order.
            pub fn labels() -> Vec<&'static str> {
                Self::all().into_iter().map(CatalogOption::label).collect()
            }
        }

        impl CatalogOption for $name {
            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn parse(value: &str) -> Option<Self> {
                let value = value.trim();
                <Self as strum::IntoEnumIterator>::iter()
                    .find(|option| option.label().eq_ignore_ascii_case(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_options! {
    /// Broad genre of the adventure.
    Genre {
        /// Classic sword and sorcery
        HighFantasy => "High Fantasy",
        /// Bleak, morally grey fantasy
        DarkFantasy => "Dark Fantasy",
        /// Ruins of a fallen world
        PostApocalyptic => "Post-Apocalyptic",
        /// Clockwork and steam
        Steampunk => "Steampunk",
        /// Let the model choose
        NoPreference => "No Preference",
    }
}

labelled_options! {
    /// How magic and technology shape the world.
    WorldStyle {
        /// Magic is everywhere
        MagicRich => "Magic-Rich",
        /// Magic is rare
        LowMagic => "Low Magic",
        /// Machines over spells
        Technological => "Technological",
        /// Let the model choose
        NoPreference => "No Preference",
    }
}

labelled_options! {
    /// Emotional register of the writing.
    Tone {
        /// Playful and light
        Lighthearted => "Lighthearted",
        /// Dark and serious
        Grim => "Grim",
        /// Heroic, sweeping stakes
        Epic => "Epic",
        /// Suspense and secrets
        Mystery => "Mystery",
        /// Let the model choose
        NoPreference => "No Preference",
    }
}

labelled_options! {
    /// Central conflict of the adventure.
    Theme {
        /// The dead rise
        UndeadInvasion => "Undead Invasion",
        /// Courts, factions and intrigue
        PoliticalDrama => "Political Drama",
        /// A prize worth the danger
        TreasureHunt => "Treasure Hunt",
        /// Endure a hostile place
        Survival => "Survival",
        /// Let the model choose
        NoPreference => "No Preference",
    }
}

labelled_options! {
    /// Game system the adventure is written for.
    Ruleset {
        /// Fifth edition
        FifthEdition => "5e",
        /// The revised core rules
        DndOne => "D&D One",
        /// Pathfinder
        Pathfinder => "Pathfinder",
        /// A homebrew or unlisted system
        Custom => "Custom",
    }
}

labelled_options! {
    /// How familiar the players are with tabletop play.
    ExperienceLevel {
        /// New to the game
        Novice => "Novice",
        /// Comfortable with the rules
        Intermediate => "Intermediate",
        /// Veterans
        Expert => "Expert",
    }
}

/// Map any casing of a known label to its catalog casing.
///
/// Unknown values are trimmed and otherwise passed through untouched.
///
/// # Examples
///
/// ```
/// use questwright_core::{normalize_label, ExperienceLevel, Tone};
///
/// assert_eq!(normalize_label::<ExperienceLevel>("NOVICE"), "Novice");
/// assert_eq!(normalize_label::<Tone>(" lighthearted "), "Lighthearted");
/// assert_eq!(normalize_label::<Tone>("Whimsical"), "Whimsical");
/// ```
pub fn normalize_label<T: CatalogOption>(value: &str) -> String {
    match T::parse(value) {
        Some(option) => option.label().to_string(),
        None => value.trim().to_string(),
    }
}

/// Serializable snapshot of every list the form offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    /// Genre labels
    pub genres: Vec<&'static str>,
    /// World style labels
    pub world_styles: Vec<&'static str>,
    /// Tone labels
    pub tones: Vec<&'static str>,
    /// Theme labels
    pub themes: Vec<&'static str>,
    /// Ruleset labels
    pub rulesets: Vec<&'static str>,
    /// Experience level labels
    pub experience_levels: Vec<&'static str>,
    /// Scene type labels
    pub scene_types: Vec<&'static str>,
    /// Detail levels
    pub detail_levels: Vec<&'static str>,
    /// Smallest offered party
    pub min_players: u32,
    /// Largest offered party
    pub max_players: u32,
    /// Lowest offered average level
    pub min_level: u32,
    /// Highest offered average level
    pub max_level: u32,
    /// Timeline capacity enforced for submissions
    pub max_scenes: usize,
}

impl OptionCatalog {
    /// Capture the catalog with the given timeline capacity.
    pub fn snapshot(max_scenes: usize) -> Self {
        Self {
            genres: Genre::labels(),
            world_styles: WorldStyle::labels(),
            tones: Tone::labels(),
            themes: Theme::labels(),
            rulesets: Ruleset::labels(),
            experience_levels: ExperienceLevel::labels(),
            scene_types: SceneType::all().into_iter().map(SceneType::label).collect(),
            detail_levels: DetailLevel::all().into_iter().map(DetailLevel::as_str).collect(),
            min_players: *PLAYER_RANGE.start(),
            max_players: *PLAYER_RANGE.end(),
            min_level: *LEVEL_RANGE.start(),
            max_level: *LEVEL_RANGE.end(),
            max_scenes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Ruleset::parse("pathfinder"), Some(Ruleset::Pathfinder));
        assert_eq!(Ruleset::parse(" D&D ONE "), Some(Ruleset::DndOne));
        assert_eq!(WorldStyle::parse("magic-rich"), Some(WorldStyle::MagicRich));
        assert_eq!(Genre::parse("Space Opera"), None);
    }

    #[test]
    fn labels_keep_form_order() {
        assert_eq!(ExperienceLevel::labels(), vec!["Novice", "Intermediate", "Expert"]);
        assert_eq!(Ruleset::labels()[0], "5e");
    }

    #[test]
    fn snapshot_lists_everything() {
        let catalog = OptionCatalog::snapshot(15);
        assert_eq!(catalog.genres.len(), 5);
        assert_eq!(catalog.scene_types.len(), 8);
        assert_eq!(catalog.detail_levels, vec!["low", "medium", "high"]);
        assert_eq!((catalog.min_players, catalog.max_players), (1, 10));
        assert_eq!((catalog.min_level, catalog.max_level), (1, 20));
        assert_eq!(catalog.max_scenes, 15);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let json = serde_json::to_value(OptionCatalog::snapshot(4)).unwrap();
        assert!(json.get("worldStyles").is_some());
        assert_eq!(json["maxScenes"], 4);
    }
}
