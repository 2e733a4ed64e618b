//! Prompt assembly.
//!
//! One canonical prompt layout. Fragments are joined with blank lines and an
//! omitted fragment leaves nothing behind, so each feature flag touches
//! exactly one fragment of the output.

use crate::{
    AdventureRequest, ChatMessage, CompletionRequest, DetailLevel, ExperienceLevel,
    ModelSelection, SceneType, Tone, WorldStyle, normalize_label,
};

/// Included when dialogue is requested.
pub const DIALOGUE_INSTRUCTION: &str =
    "Include short NPC dialogue snippets to guide player interaction.";

/// Included when puzzles are requested.
pub const PUZZLE_INSTRUCTION: &str = "Include at least one puzzle, trap, or ritual. \
Detail mechanics, skill checks, and success/failure outcomes.";

/// Included when stat blocks are requested.
pub const STATBLOCK_INSTRUCTION: &str = "For each combat encounter, provide a stat block in this format:

**Enemy Name**
- **AC:**
- **HP:**
- **Attacks:**
- **Abilities:**
- **Tactics:**";

/// Included when stat blocks are not requested.
pub const NO_STATBLOCKS_INSTRUCTION: &str =
    "Combatants should be described narratively; do not include stat blocks.";

const OUTPUT_FORMAT: &str = "Output must be in professional **Markdown** format for PDF/web.";

/// How the scene order is written into the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SceneListStyle {
    /// Numbered list with per-type constraints and a strict ordering directive.
    #[default]
    Numbered,
    /// A single arrow-joined line.
    Arrow,
}

/// Builds the prompt text for an [`AdventureRequest`].
///
/// # Examples
///
/// ```
/// use questwright_core::{AdventureRequest, PromptAssembler, SceneType};
///
/// let request = AdventureRequest::builder()
///     .genre("Steampunk")
///     .tone("epic")
///     .world_style("technological")
///     .ruleset("Pathfinder")
///     .experience_level("expert")
///     .theme("Treasure Hunt")
///     .number_of_players(5u32)
///     .average_player_level(11u32)
///     .structure(vec![SceneType::Investigation, SceneType::BossFight])
///     .build()
///     .unwrap();
///
/// let prompt = PromptAssembler::default().assemble(&request);
/// assert!(prompt.starts_with("You are a professional Pathfinder Dungeon Master."));
/// assert!(prompt.contains("for 5 Expert players at level 11"));
/// assert!(prompt.contains("- Scene 2: Boss Fight"));
/// assert!(prompt.ends_with("None"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptAssembler {
    scene_style: SceneListStyle,
}

impl PromptAssembler {
    /// Create an assembler with the given scene list style.
    pub fn new(scene_style: SceneListStyle) -> Self {
        Self { scene_style }
    }

    /// Assemble the full prompt, trimmed.
    #[tracing::instrument(skip_all, fields(scenes = request.structure.len(), detail = %request.detail_level))]
    pub fn assemble(&self, request: &AdventureRequest) -> String {
        let flags = &request.features;

        let fragments = [
            opening(request),
            setting(request),
            match self.scene_style {
                SceneListStyle::Numbered => numbered_scenes(&request.structure),
                SceneListStyle::Arrow => arrow_scenes(&request.structure),
            },
            detail_instruction(request.detail_level).to_string(),
            optional(flags.dialogue, DIALOGUE_INSTRUCTION),
            optional(flags.puzzles, PUZZLE_INSTRUCTION),
            if flags.statblocks {
                STATBLOCK_INSTRUCTION.to_string()
            } else {
                NO_STATBLOCKS_INSTRUCTION.to_string()
            },
            OUTPUT_FORMAT.to_string(),
            skeleton(&request.structure),
            format!("Additional User Notes:\n{}", request.notes().unwrap_or("None")),
        ];

        let prompt = fragments
            .iter()
            .filter(|fragment| !fragment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim()
            .to_string();

        tracing::debug!(prompt_len = prompt.len(), "Assembled prompt");
        prompt
    }
}

fn optional(enabled: bool, text: &str) -> String {
    if enabled {
        text.to_string()
    } else {
        String::new()
    }
}

fn opening(request: &AdventureRequest) -> String {
    format!(
        "You are a professional {} Dungeon Master. Write a tightly structured **one-shot adventure** for {} {} players at level {}.",
        request.ruleset,
        request.number_of_players,
        normalize_label::<ExperienceLevel>(&request.experience_level),
        request.average_player_level,
    )
}

fn setting(request: &AdventureRequest) -> String {
    format!(
        "**Genre:** {}  \n**Theme:** {}  \n**World Style:** {}  \n**Tone:** {}",
        request.genre,
        request.theme,
        normalize_label::<WorldStyle>(&request.world_style),
        normalize_label::<Tone>(&request.tone),
    )
}

fn numbered_scenes(scenes: &[SceneType]) -> String {
    let Some(first) = scenes.first() else {
        return unstructured_scenes();
    };

    let list = scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| format!("- Scene {}: {}", i + 1, scene))
        .collect::<Vec<_>>()
        .join("\n");

    let mut distinct: Vec<SceneType> = Vec::new();
    for scene in scenes {
        if !distinct.contains(scene) {
            distinct.push(*scene);
        }
    }
    let constraints = distinct
        .iter()
        .map(|scene| format!("- A \"{}\" scene {}", scene, scene.constraint()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Follow the exact sequence and types below. Do not change, merge, or reorder scene types. \
Each scene must begin with a second-level markdown header labeled with the type and scene number.

Example format:
## Scene 1: {first} — [Scene Title]

Scene list:
{list}

Important:
{constraints}
- Do not substitute or reinterpret scene types."
    )
}

fn arrow_scenes(scenes: &[SceneType]) -> String {
    if scenes.is_empty() {
        return unstructured_scenes();
    }
    let chain = scenes
        .iter()
        .map(|scene| scene.label())
        .collect::<Vec<_>>()
        .join(" → ");
    format!("Structure the adventure as these scenes, in this order: {chain}.")
}

fn unstructured_scenes() -> String {
    "No scene structure was specified. Choose 3–5 scenes that best suit the theme and tone."
        .to_string()
}

fn detail_instruction(level: DetailLevel) -> &'static str {
    match level {
        DetailLevel::Low => "Each scene should include 4–5 narrative sentences.",
        DetailLevel::Medium => {
            "Each scene should include 6–8 narrative sentences, with suggested DCs, outcomes, \
and key NPCs or environmental elements."
        }
        DetailLevel::High => {
            "Each scene must include 12–15 richly written narrative sentences, with vivid settings, \
character choices, dynamic outcomes, and optional mechanics or stat blocks."
        }
    }
}

fn skeleton(scenes: &[SceneType]) -> String {
    let scene_headers = if scenes.is_empty() {
        "## Scene X: [Scene Type] — [Scene Title]".to_string()
    } else {
        scenes
            .iter()
            .enumerate()
            .map(|(i, scene)| format!("## Scene {}: {} — [Scene Title]", i + 1, scene))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "### Structure:
- Begin with:
## Prologue
Introduce the setting, mission hook, and tone.
- For each scene, in order:
{scene_headers}
Follow each header with the scene's structured content.
- End with:
## Conclusion
Summarize outcomes and world reaction.
- Finish with:
## DM Notes
Include treasure, XP, motivations, secrets, and optional hooks."
    )
}

/// Build the completion request for an adventure.
///
/// High detail selects the detailed model profile and its larger output
/// ceiling; every other level uses the standard profile.
pub fn build_completion_request(
    request: &AdventureRequest,
    selection: &ModelSelection,
    temperature: f32,
) -> CompletionRequest {
    let profile = selection.for_detail(request.detail_level);
    CompletionRequest {
        model: profile.model().clone(),
        messages: vec![ChatMessage::user(PromptAssembler::default().assemble(request))],
        temperature,
        max_tokens: *profile.max_tokens(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeatureFlags;

    fn request() -> AdventureRequest {
        AdventureRequest::builder()
            .genre("High Fantasy")
            .tone("Lighthearted")
            .world_style("Magic-Rich")
            .ruleset("5e")
            .experience_level("Novice")
            .theme("Undead Invasion")
            .number_of_players(4u32)
            .average_player_level(5u32)
            .structure(vec![SceneType::Combat, SceneType::Puzzle])
            .build()
            .unwrap()
    }

    #[test]
    fn case_is_normalized_to_catalog_labels() {
        let mut shouty = request();
        shouty.experience_level = "NOVICE".to_string();
        shouty.tone = "lighthearted".to_string();
        shouty.world_style = "magic-rich".to_string();
        assert_eq!(
            PromptAssembler::default().assemble(&shouty),
            PromptAssembler::default().assemble(&request())
        );
    }

    #[test]
    fn constraints_listed_once_per_type() {
        let mut repeated = request();
        repeated.structure = vec![SceneType::Combat, SceneType::Trap, SceneType::Combat];
        let prompt = PromptAssembler::default().assemble(&repeated);
        assert_eq!(prompt.matches("A \"Combat\" scene").count(), 1);
        assert!(prompt.contains("- Scene 3: Combat"));
        assert!(prompt.contains("A \"Trap\" scene must present a hazard"));
    }

    #[test]
    fn empty_structure_lets_the_model_choose() {
        let mut open = request();
        open.structure.clear();
        let prompt = PromptAssembler::default().assemble(&open);
        assert!(prompt.contains("No scene structure was specified"));
        assert!(prompt.contains("## Scene X: [Scene Type] — [Scene Title]"));
        assert!(!prompt.contains("Scene list:"));
    }

    #[test]
    fn arrow_style_joins_in_order() {
        let prompt = PromptAssembler::new(SceneListStyle::Arrow).assemble(&request());
        assert!(prompt.contains("in this order: Combat → Puzzle."));
        assert!(!prompt.contains("Important:"));
    }

    #[test]
    fn statblock_branch_always_emits_one_instruction() {
        let mut without = request();
        let prompt = PromptAssembler::default().assemble(&without);
        assert!(prompt.contains(NO_STATBLOCKS_INSTRUCTION));
        assert!(!prompt.contains("**Enemy Name**"));

        without.features = FeatureFlags {
            statblocks: true,
            ..FeatureFlags::default()
        };
        let prompt = PromptAssembler::default().assemble(&without);
        assert!(prompt.contains(STATBLOCK_INSTRUCTION));
        assert!(!prompt.contains(NO_STATBLOCKS_INSTRUCTION));
    }

    #[test]
    fn detail_tiers_are_distinct() {
        let mut tiered = request();
        let mut seen = Vec::new();
        for level in DetailLevel::all() {
            tiered.detail_level = level;
            let prompt = PromptAssembler::default().assemble(&tiered);
            assert!(prompt.contains(detail_instruction(level)));
            seen.push(prompt);
        }
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn notes_are_verbatim_or_none() {
        let mut noted = request();
        assert!(PromptAssembler::default()
            .assemble(&noted)
            .ends_with("Additional User Notes:\nNone"));

        noted.extra_notes = Some("The lich is *secretly* the mayor.".to_string());
        assert!(PromptAssembler::default()
            .assemble(&noted)
            .ends_with("Additional User Notes:\nThe lich is *secretly* the mayor."));
    }

    #[test]
    fn high_detail_selects_the_larger_model() {
        let selection = ModelSelection::default();
        let mut detailed = request();

        let standard = build_completion_request(&detailed, &selection, 0.7);
        assert_eq!(standard.model, "gpt-3.5-turbo");
        assert_eq!(standard.max_tokens, 3000);

        detailed.detail_level = DetailLevel::High;
        let large = build_completion_request(&detailed, &selection, 0.7);
        assert_eq!(large.model, "gpt-4o");
        assert_eq!(large.max_tokens, 8000);
        assert_eq!(large.temperature, 0.7);
        assert_eq!(large.messages.len(), 1);
        assert_eq!(large.messages[0].role, crate::Role::User);
    }

    #[test]
    fn output_is_trimmed() {
        let mut padded = request();
        padded.extra_notes = Some("keep it short   \n\n".to_string());
        let prompt = PromptAssembler::default().assemble(&padded);
        assert_eq!(prompt, prompt.trim());
        assert!(prompt.ends_with("keep it short"));
    }
}
