//! Bounded, ordered list of scenes.

use crate::SceneType;
use serde::Serialize;

/// The adventure's scene order, capped at a fixed capacity.
///
/// Scenes keep insertion order. Appending past capacity and removing an
/// out-of-range index are both silent no-ops.
///
/// # Examples
///
/// ```
/// use questwright_core::{SceneTimeline, SceneType};
///
/// let mut timeline = SceneTimeline::new(2);
/// assert!(timeline.append(SceneType::Combat));
/// assert!(timeline.append(SceneType::Puzzle));
/// assert!(!timeline.append(SceneType::Trap));
/// assert_eq!(timeline.scenes(), &[SceneType::Combat, SceneType::Puzzle]);
///
/// assert_eq!(timeline.remove_at(5), None);
/// assert_eq!(timeline.remove_at(0), Some(SceneType::Combat));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SceneTimeline {
    scenes: Vec<SceneType>,
    capacity: usize,
}

impl SceneTimeline {
    /// Create an empty timeline.
    pub fn new(capacity: usize) -> Self {
        Self {
            scenes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a timeline from existing scenes, dropping any beyond capacity.
    pub fn with_scenes(capacity: usize, scenes: impl IntoIterator<Item = SceneType>) -> Self {
        let mut timeline = Self::new(capacity);
        for scene in scenes {
            if !timeline.append(scene) {
                break;
            }
        }
        timeline
    }

    /// Add a scene at the end. Returns `false` if the timeline is full.
    pub fn append(&mut self, scene: SceneType) -> bool {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, %scene, "Timeline full, scene not added");
            return false;
        }
        self.scenes.push(scene);
        true
    }

    /// Remove the scene at `index`, shifting later scenes left.
    pub fn remove_at(&mut self, index: usize) -> Option<SceneType> {
        if index < self.scenes.len() {
            Some(self.scenes.remove(index))
        } else {
            None
        }
    }

    /// Scenes in narrative order.
    pub fn scenes(&self) -> &[SceneType] {
        &self.scenes
    }

    /// Consume the timeline, keeping the scenes.
    pub fn into_scenes(self) -> Vec<SceneType> {
        self.scenes
    }

    /// Maximum number of scenes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether no scenes have been added.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Whether further appends will be ignored.
    pub fn is_full(&self) -> bool {
        self.scenes.len() >= self.capacity
    }
}
