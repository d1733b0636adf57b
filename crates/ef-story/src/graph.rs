//! The scene graph and its integrity checks.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use serde::Serialize;

use crate::error::{StoryError, StoryResult};
use crate::prompt::{STOP_TOKEN, normalize};
use crate::scene::{Scene, Step};

/// A directed graph of scenes keyed by id.
#[derive(Debug, Clone, Serialize)]
pub struct SceneGraph {
    start: String,
    scenes: BTreeMap<String, Scene>,
}

impl SceneGraph {
    /// Create an empty graph that starts at `start`.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            scenes: BTreeMap::new(),
        }
    }

    /// Add a scene, rejecting duplicate ids.
    pub fn insert(&mut self, scene: Scene) -> StoryResult<()> {
        if self.scenes.contains_key(&scene.id) {
            return Err(StoryError::DuplicateScene(scene.id));
        }
        self.scenes.insert(scene.id.clone(), scene);
        Ok(())
    }

    /// Add a scene, builder style.
    pub fn with_scene(mut self, scene: Scene) -> StoryResult<Self> {
        self.insert(scene)?;
        Ok(self)
    }

    /// Id of the first scene.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Look up a scene by id.
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Look up a scene by id, failing if it does not exist.
    pub fn scene(&self, id: &str) -> StoryResult<&Scene> {
        self.get(id)
            .ok_or_else(|| StoryError::UnknownScene(id.to_string()))
    }

    /// All scenes, ordered by id.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Whether entering this scene always ends the story without a prompt.
    pub fn is_terminal(&self, id: &str) -> bool {
        self.get(id).is_some_and(|scene| {
            !scene.variants.is_empty()
                && scene.variants.iter().all(|v| match &v.step {
                    Step::FallThrough(transition) => transition.always_ends(),
                    Step::Choose { .. } => false,
                })
        })
    }

    /// Ids of every scene reachable from the start, following all routes.
    pub fn reachable(&self) -> BTreeSet<String> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([self.start.clone()]);

        while let Some(id) = queue.pop_front() {
            if !seen.insert(id.clone()) {
                continue;
            }
            let Some(scene) = self.get(&id) else {
                continue;
            };
            for variant in &scene.variants {
                for transition in variant.transitions() {
                    queue.extend(transition.scene_targets().map(str::to_string));
                }
            }
        }

        seen
    }

    /// Check that the graph can never get stuck.
    ///
    /// The start scene must exist; every scene ends with an unconditional
    /// variant; every option set is non-empty with unique, non-reserved
    /// tokens; every transition ends with an unconditional route; and every
    /// route leads to an existing scene or the ending resolver.
    pub fn validate(&self) -> StoryResult<()> {
        self.scene(&self.start)?;

        for scene in self.scenes.values() {
            if !scene
                .variants
                .last()
                .is_some_and(|v| v.condition.is_unconditional())
            {
                return Err(StoryError::MissingFallback {
                    scene: scene.id.clone(),
                    what: "variant",
                });
            }

            for variant in &scene.variants {
                if let Step::Choose { .. } = &variant.step {
                    check_options(&scene.id, &variant.tokens())?;
                }

                for transition in variant.transitions() {
                    if !transition.has_fallback() {
                        return Err(StoryError::MissingFallback {
                            scene: scene.id.clone(),
                            what: "route",
                        });
                    }
                    if let Some(missing) = transition
                        .scene_targets()
                        .find(|target| !self.scenes.contains_key(*target))
                    {
                        return Err(StoryError::UnknownTarget {
                            from: scene.id.clone(),
                            to: missing.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn check_options(scene: &str, tokens: &[&str]) -> StoryResult<()> {
    let invalid = |reason: String| StoryError::InvalidOption {
        scene: scene.to_string(),
        reason,
    };

    if tokens.is_empty() {
        return Err(invalid("no options to choose from".to_string()));
    }

    let mut seen = HashSet::new();
    for token in tokens {
        if token.is_empty() {
            return Err(invalid("empty token".to_string()));
        }
        if normalize(token) != *token {
            return Err(invalid(format!("'{token}' is not trimmed and lowercase")));
        }
        if *token == STOP_TOKEN {
            return Err(invalid(format!("'{STOP_TOKEN}' is reserved")));
        }
        if !seen.insert(*token) {
            return Err(invalid(format!("'{token}' offered twice")));
        }
    }

    Ok(())
}
