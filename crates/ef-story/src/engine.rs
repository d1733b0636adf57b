//! The interpreter that executes one scene per step.

use tracing::{debug, info};

use crate::choice::{Effect, Target, Transition};
use crate::ending::{EndingKind, EndingResolver};
use crate::error::{StoryError, StoryResult};
use crate::forest::{enchanted_forest, forest_endings};
use crate::graph::SceneGraph;
use crate::prompt::{Prompter, Reply};
use crate::scene::{Step, render_line};
use crate::state::SessionState;

/// What a single step of the engine produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// The story moved on to this scene.
    Continue(String),
    /// The player stopped, or the session was already inactive.
    Quit,
    /// The story reached an ending.
    Reached(EndingKind),
}

/// Interprets a validated scene graph against a session state.
#[derive(Debug, Clone)]
pub struct StoryEngine {
    graph: SceneGraph,
    endings: EndingResolver,
}

impl StoryEngine {
    /// Create an engine, rejecting graphs that could get stuck.
    pub fn new(graph: SceneGraph, endings: EndingResolver) -> StoryResult<Self> {
        graph.validate()?;
        Ok(Self { graph, endings })
    }

    /// The Enchanted Forest.
    pub fn forest() -> StoryResult<Self> {
        Self::new(enchanted_forest()?, forest_endings())
    }

    /// The scene graph.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The ending resolver.
    pub fn endings(&self) -> &EndingResolver {
        &self.endings
    }

    /// Execute the current scene.
    ///
    /// Marks the scene visited, renders the matching variant, applies entry
    /// effects, asks for a choice if the variant has options, then applies
    /// the choice and follows its transition. A `stop` reply ends the
    /// session before any effect of the option is applied.
    pub fn execute_current_scene(
        &self,
        state: &mut SessionState,
        prompter: &mut Prompter<'_>,
    ) -> StoryResult<StepResult> {
        if !state.active {
            return Ok(StepResult::Quit);
        }

        let scene_id = state.current_scene.clone();
        let scene = self.graph.scene(&scene_id)?;
        if state.mark_visited(&scene_id) {
            debug!(scene = %scene_id, "first visit");
        }

        let variant = scene
            .select_variant(&state.inventory)
            .ok_or_else(|| StoryError::NoMatchingVariant(scene_id.clone()))?;
        debug!(scene = %scene_id, condition = ?variant.condition, "variant selected");

        for line in &variant.body {
            prompter.say(&render_line(line, &state.player_name));
        }
        apply_effects(&variant.on_enter, state, prompter);

        let transition = match &variant.step {
            Step::FallThrough(transition) => transition,
            Step::Choose { prompt, options } => {
                let tokens = variant.tokens();
                let token = match prompter.ask(prompt, Some(tokens.as_slice())) {
                    Reply::Stop => {
                        state.stop();
                        prompter.farewell();
                        info!(scene = %scene_id, "player stopped the story");
                        return Ok(StepResult::Quit);
                    }
                    Reply::Token(token) => token,
                };

                let option = options
                    .iter()
                    .find(|o| o.token == token)
                    .ok_or_else(|| StoryError::InvalidOption {
                        scene: scene_id.clone(),
                        reason: format!("'{token}' was accepted but is not offered"),
                    })?;
                debug!(scene = %scene_id, %token, "choice made");

                state.record_choice(&scene_id, &token);
                apply_effects(&option.effects, state, prompter);
                &option.transition
            }
        };

        self.follow(&scene_id, transition, state, prompter)
    }

    fn follow(
        &self,
        scene_id: &str,
        transition: &Transition,
        state: &mut SessionState,
        prompter: &mut Prompter<'_>,
    ) -> StoryResult<StepResult> {
        let route = transition
            .resolve(&state.inventory)
            .ok_or_else(|| StoryError::NoMatchingRoute(scene_id.to_string()))?;

        for line in &route.lines {
            prompter.say(&render_line(line, &state.player_name));
        }

        match &route.target {
            Target::Ending => {
                let kind = self.endings.kind_for(&state.inventory);
                info!(scene = %scene_id, ending = %kind, "ending reached");
                Ok(StepResult::Reached(kind))
            }
            Target::Scene(next) => {
                if self.graph.get(next).is_none() {
                    return Err(StoryError::UnknownTarget {
                        from: scene_id.to_string(),
                        to: next.clone(),
                    });
                }
                debug!(from = %scene_id, to = %next, "transition");
                state.current_scene = next.clone();
                Ok(StepResult::Continue(next.clone()))
            }
        }
    }
}

fn apply_effects(effects: &[Effect], state: &mut SessionState, prompter: &mut Prompter<'_>) {
    for effect in effects {
        match effect {
            Effect::GiveItem(item) => {
                debug!(%item, "item gained");
                state.add_item(*item);
            }
            Effect::Narrate(line) => prompter.say(&render_line(line, &state.player_name)),
            Effect::Pause(beat) => prompter.pause(*beat),
        }
    }
}
