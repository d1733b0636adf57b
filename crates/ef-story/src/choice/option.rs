//! Player-facing options.

use serde::Serialize;

use super::effect::{Beat, Effect};
use super::transition::Transition;
use crate::item::Item;

/// A single option offered by a scene variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// The token the player types, lowercase.
    pub token: String,
    /// Effects to apply when this option is selected.
    pub effects: Vec<Effect>,
    /// Where the story goes afterwards.
    pub transition: Transition,
}

impl ChoiceOption {
    /// Create a new option with the given token and transition.
    ///
    /// The token is trimmed and lowercased so it matches normalized input.
    pub fn new(token: impl Into<String>, transition: Transition) -> Self {
        Self {
            token: token.into().trim().to_lowercase(),
            effects: Vec::new(),
            transition,
        }
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Add a line of narration.
    pub fn narrate(self, line: impl Into<String>) -> Self {
        self.with_effect(Effect::narrate(line))
    }

    /// Add several lines of narration.
    pub fn narrate_lines(mut self, lines: &[&str]) -> Self {
        self.effects
            .extend(lines.iter().map(|line| Effect::narrate(*line)));
        self
    }

    /// Give the player an item.
    pub fn give(self, item: Item) -> Self {
        self.with_effect(Effect::GiveItem(item))
    }

    /// Pause for a beat.
    pub fn pause(self, beat: Beat) -> Self {
        self.with_effect(Effect::Pause(beat))
    }
}
