//! Scenes and their variants.
//!
//! A scene is entered by id. At entry the engine picks the first variant
//! whose condition holds for the inventory; that variant supplies the body
//! text, any entry effects, and either a set of options or a fixed
//! fall-through transition.

use serde::Serialize;

use crate::choice::{ChoiceOption, Condition, Effect, Transition};
use crate::item::Item;

/// Placeholder replaced with the player's name when a line is rendered.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Replace the name placeholder in an authored line.
pub fn render_line(line: &str, player_name: &str) -> String {
    line.replace(NAME_PLACEHOLDER, player_name)
}

/// What happens after a variant's body has been rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Ask the player to pick one of the options.
    Choose {
        /// Question shown above the options.
        prompt: String,
        /// Options in display order.
        options: Vec<ChoiceOption>,
    },
    /// Move on without asking.
    FallThrough(Transition),
}

/// One condition-gated version of a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Condition over the inventory at entry.
    pub condition: Condition,
    /// Narrative lines, rendered in order.
    pub body: Vec<String>,
    /// Effects applied after the body, before any prompt.
    pub on_enter: Vec<Effect>,
    /// Prompt or fall-through.
    pub step: Step,
}

impl Variant {
    /// A variant that applies whatever the inventory holds.
    pub fn otherwise() -> Self {
        Self::when(Condition::Always)
    }

    /// A variant gated on a condition.
    pub fn when(condition: Condition) -> Self {
        Self {
            condition,
            body: Vec::new(),
            on_enter: Vec::new(),
            step: Step::FallThrough(Transition::new()),
        }
    }

    /// A variant gated on carrying an item.
    pub fn when_holding(item: Item) -> Self {
        Self::when(Condition::has(item))
    }

    /// Append body lines.
    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.body.extend(lines.iter().map(|line| line.to_string()));
        self
    }

    /// Add an effect applied on entry.
    pub fn on_enter(mut self, effect: Effect) -> Self {
        self.on_enter.push(effect);
        self
    }

    /// Offer options to the player.
    pub fn choose(mut self, prompt: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        self.step = Step::Choose {
            prompt: prompt.into(),
            options,
        };
        self
    }

    /// Continue without asking.
    pub fn fall_through(mut self, transition: Transition) -> Self {
        self.step = Step::FallThrough(transition);
        self
    }

    /// Option tokens, or an empty list for fall-through variants.
    pub fn tokens(&self) -> Vec<&str> {
        match &self.step {
            Step::Choose { options, .. } => options.iter().map(|o| o.token.as_str()).collect(),
            Step::FallThrough(_) => Vec::new(),
        }
    }

    /// Every transition reachable from this variant.
    pub fn transitions(&self) -> Vec<&Transition> {
        match &self.step {
            Step::Choose { options, .. } => options.iter().map(|o| &o.transition).collect(),
            Step::FallThrough(transition) => vec![transition],
        }
    }
}

/// A named narrative unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    /// Unique id.
    pub id: String,
    /// Variants in priority order; the last one should be unconditional.
    pub variants: Vec<Variant>,
}

impl Scene {
    /// Create a scene with no variants.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            variants: Vec::new(),
        }
    }

    /// Add a variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Pick the first variant whose condition holds for the inventory.
    pub fn select_variant(&self, inventory: &[Item]) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| v.condition.evaluate(inventory))
    }
}
