//! Effects that modify player state or narrate.

use serde::Serialize;

use crate::item::Item;

/// A dramatic pause. Frontends decide how long each beat lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Beat {
    /// A moment to let a title sink in.
    Brief,
    /// The usual pause between scenes.
    Short,
    /// A longer pause after a significant moment.
    Long,
}

/// An effect applied when a choice is made or a variant is entered.
///
/// Effects run in the order they were authored, so narration, pauses and
/// item grants interleave exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Give an item to the player.
    GiveItem(Item),
    /// Render a line of transition text.
    Narrate(String),
    /// Pause before continuing. Purely cosmetic.
    Pause(Beat),
}

impl Effect {
    /// Shorthand for [`Effect::Narrate`].
    pub fn narrate(line: impl Into<String>) -> Self {
        Effect::Narrate(line.into())
    }
}
