//! Form state and the submission state machine.
//!
//! The form is an immutable [`FormState`] advanced by [`reduce`]. A submission
//! moves `Idle → Submitting → Succeeded | Failed`; while `Submitting`, further
//! submits and edits are ignored. Once finished, the next edit or reset
//! returns to `Idle` and the next submit starts over. There is no
//! cancellation.

use crate::{AdventureRequest, DetailLevel, SceneTimeline, SceneType};

/// Where the current submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet, or the last result was cleared
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// The model returned an adventure
    Succeeded(String),
    /// The call failed; holds the message shown to the user
    Failed(String),
}

impl SubmissionState {
    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Actions the form can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Set the genre label
    SetGenre(String),
    /// Set the tone label
    SetTone(String),
    /// Set the world style label
    SetWorldStyle(String),
    /// Set the ruleset label
    SetRuleset(String),
    /// Set the experience label
    SetExperienceLevel(String),
    /// Set the theme label
    SetTheme(String),
    /// Set the party size
    SetPlayers(u32),
    /// Set the average level
    SetAverageLevel(u32),
    /// Replace the notes
    SetNotes(Option<String>),
    /// Set the detail level
    SetDetailLevel(DetailLevel),
    /// Flip the dialogue flag
    ToggleDialogue,
    /// Flip the statblock flag
    ToggleStatblocks,
    /// Flip the puzzle flag
    TogglePuzzles,
    /// Append a scene, if there is room
    AddScene(SceneType),
    /// Remove the scene at an index, if it exists
    RemoveScene(usize),
    /// Start a submission
    Submit,
    /// Finish the in-flight submission
    Resolve(Result<String, String>),
    /// Clear the last result
    Reset,
}

/// Snapshot of the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    request: AdventureRequest,
    max_scenes: usize,
    submission: SubmissionState,
}

impl FormState {
    /// Start from a request with the given timeline capacity.
    ///
    /// Scenes beyond capacity are dropped.
    pub fn new(mut request: AdventureRequest, max_scenes: usize) -> Self {
        request.structure = SceneTimeline::with_scenes(max_scenes, request.structure).into_scenes();
        Self {
            request,
            max_scenes,
            submission: SubmissionState::Idle,
        }
    }

    /// The request as it would be submitted now.
    pub fn request(&self) -> &AdventureRequest {
        &self.request
    }

    /// The scene timeline.
    pub fn timeline(&self) -> SceneTimeline {
        SceneTimeline::with_scenes(self.max_scenes, self.request.structure.iter().copied())
    }

    /// Submission status.
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Whether a submit action would start a request.
    pub fn can_submit(&self) -> bool {
        !self.submission.is_loading()
    }
}

/// Apply an action, producing the next state.
///
/// # Examples
///
/// ```
/// use questwright_core::{AdventureRequest, FormAction, FormState, SubmissionState, reduce};
///
/// let request = AdventureRequest::builder()
///     .genre("Dark Fantasy").tone("Grim").world_style("Low Magic")
///     .ruleset("5e").experience_level("Novice").theme("Survival")
///     .number_of_players(4u32).average_player_level(3u32)
///     .build().unwrap();
///
/// let state = FormState::new(request, 4);
/// let state = reduce(&state, FormAction::Submit);
/// assert!(state.submission().is_loading());
///
/// let state = reduce(&state, FormAction::Resolve(Ok("# Prologue".into())));
/// assert_eq!(state.submission(), &SubmissionState::Succeeded("# Prologue".into()));
/// ```
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    let mut next = state.clone();

    if state.submission.is_loading() {
        if let FormAction::Resolve(outcome) = action {
            next.submission = match outcome {
                Ok(text) => SubmissionState::Succeeded(text),
                Err(message) => SubmissionState::Failed(message),
            };
        } else {
            tracing::debug!(?action, "Ignoring action while a submission is in flight");
        }
        return next;
    }

    let is_edit = !matches!(
        action,
        FormAction::Submit | FormAction::Resolve(_) | FormAction::Reset
    );
    if is_edit {
        next.submission = SubmissionState::Idle;
    }

    let request = &mut next.request;
    match action {
        FormAction::SetGenre(value) => request.genre = value,
        FormAction::SetTone(value) => request.tone = value,
        FormAction::SetWorldStyle(value) => request.world_style = value,
        FormAction::SetRuleset(value) => request.ruleset = value,
        FormAction::SetExperienceLevel(value) => request.experience_level = value,
        FormAction::SetTheme(value) => request.theme = value,
        FormAction::SetPlayers(count) => request.number_of_players = count,
        FormAction::SetAverageLevel(level) => request.average_player_level = level,
        FormAction::SetNotes(notes) => request.extra_notes = notes,
        FormAction::SetDetailLevel(level) => request.detail_level = level,
        FormAction::ToggleDialogue => request.features.dialogue = !request.features.dialogue,
        FormAction::ToggleStatblocks => {
            request.features.statblocks = !request.features.statblocks
        }
        FormAction::TogglePuzzles => request.features.puzzles = !request.features.puzzles,
        FormAction::AddScene(scene) => {
            let mut timeline = state.timeline();
            timeline.append(scene);
            request.structure = timeline.into_scenes();
        }
        FormAction::RemoveScene(index) => {
            let mut timeline = state.timeline();
            timeline.remove_at(index);
            request.structure = timeline.into_scenes();
        }
        FormAction::Submit => next.submission = SubmissionState::Submitting,
        // Nothing in flight to resolve.
        FormAction::Resolve(_) => {}
        FormAction::Reset => next.submission = SubmissionState::Idle,
    }
    next
}
