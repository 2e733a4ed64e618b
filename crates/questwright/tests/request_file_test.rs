use questwright::{
    AdventureRequest, DetailLevel, PromptAssembler, QuestwrightConfig, SceneType, ValidationErrorKind,
    estimate_cost,
};

const LEGACY_REQUEST: &str = r#"{
    "genre": "Post-Apocalyptic",
    "tone": "gritty",
    "worldStyle": "technological",
    "ruleset": "Custom",
    "experienceLevel": "INTERMEDIATE",
    "theme": "Survival",
    "numPlayers": 3,
    "averagePlayerLevel": 2,
    "sceneBlocks": ["Exploration", "Social Interaction", "Boss Fight"],
    "extraNotes": "No psychic powers.",
    "detailLevel": "HIGH",
    "includeStatblocks": true
}"#;

#[test]
fn legacy_field_names_are_accepted() -> anyhow::Result<()> {
    let request = AdventureRequest::from_json_str(LEGACY_REQUEST)?;

    assert_eq!(request.number_of_players, 3);
    assert_eq!(
        request.structure,
        vec![SceneType::Exploration, SceneType::SocialEncounter, SceneType::BossFight]
    );
    assert_eq!(request.detail_level, DetailLevel::High);
    assert!(request.features.statblocks);
    assert!(!request.features.dialogue);
    Ok(())
}

#[test]
fn request_file_flows_through_prompt_and_estimate() -> anyhow::Result<()> {
    let request = AdventureRequest::from_json_str(LEGACY_REQUEST)?;
    let config = QuestwrightConfig::default();
    request.validate(config.generation.max_scenes)?;

    let prompt = PromptAssembler::default().assemble(&request);
    assert!(prompt.contains("Custom Dungeon Master"));
    assert!(prompt.contains("3 Intermediate players at level 2"));
    assert!(prompt.contains("No psychic powers."));

    let profile = config.models.for_detail(request.detail_level);
    let estimate = estimate_cost(&request, profile);
    assert_eq!(profile.model(), "gpt-4o");
    assert!(*estimate.estimated_cost() > 0.0);
    Ok(())
}

#[test]
fn missing_scene_list_is_reported() {
    let err = AdventureRequest::from_json_str(r#"{"genre": "Horror"}"#).unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::MissingSceneStructure);
}
