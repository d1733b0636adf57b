//! Endings and the resolver that picks one.
//!
//! Endings are checked in a fixed priority order and the first whose
//! condition holds wins. The resolver keeps an unconditional fallback apart
//! from the ranked list, so resolution is total by construction.

use std::fmt;

use serde::Serialize;

use crate::choice::Condition;
use crate::item::Item;
use crate::scene::render_line;
use crate::state::SessionState;

/// Header of the summary block.
pub const SUMMARY_HEADER: &str = "----- YOUR ADVENTURE SUMMARY -----";

/// Last line of every completed adventure.
pub const THANKS: &str = "Thank you for playing THE ENCHANTED FOREST ADVENTURE!";

/// Which ending the player reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingKind {
    /// Blessed by the ancient guardian.
    Guardian,
    /// Carrying both the crystal wand and the forest tongue.
    Mage,
    /// Everyone else.
    Explorer,
}

impl EndingKind {
    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            EndingKind::Guardian => "guardian",
            EndingKind::Mage => "mage",
            EndingKind::Explorer => "explorer",
        }
    }
}

impl fmt::Display for EndingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An authored ending.
#[derive(Debug, Clone, Serialize)]
pub struct Ending {
    /// Which ending this is.
    pub kind: EndingKind,
    /// Condition over the final inventory.
    pub condition: Condition,
    /// Lines rendered on arrival at the heart of the forest.
    pub arrival: Vec<String>,
    /// Title shown after the summary, e.g. "Forest Mage".
    pub title: String,
    /// Lines rendered after the title.
    pub closing: Vec<String>,
}

impl Ending {
    /// Create an ending with no text.
    pub fn new(kind: EndingKind, condition: Condition, title: impl Into<String>) -> Self {
        Self {
            kind,
            condition,
            arrival: Vec::new(),
            title: title.into(),
            closing: Vec::new(),
        }
    }

    /// Set the arrival lines.
    pub fn arrival(mut self, lines: &[&str]) -> Self {
        self.arrival = lines.iter().map(|line| line.to_string()).collect();
        self
    }

    /// Set the closing lines.
    pub fn closing(mut self, lines: &[&str]) -> Self {
        self.closing = lines.iter().map(|line| line.to_string()).collect();
        self
    }
}

/// The resolved ending and every line to render for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Which ending was reached.
    pub kind: EndingKind,
    /// Arrival text, summary block, ending title, closing text and thanks.
    pub lines: Vec<String>,
}

/// Picks exactly one ending from the final state.
#[derive(Debug, Clone, Serialize)]
pub struct EndingResolver {
    ranked: Vec<Ending>,
    fallback: Ending,
}

impl EndingResolver {
    /// Create a resolver from endings in priority order and a fallback.
    pub fn new(ranked: Vec<Ending>, fallback: Ending) -> Self {
        Self { ranked, fallback }
    }

    /// Every ending, fallback last.
    pub fn endings(&self) -> impl Iterator<Item = &Ending> {
        self.ranked.iter().chain(std::iter::once(&self.fallback))
    }

    /// The ending selected for an inventory.
    pub fn select(&self, inventory: &[Item]) -> &Ending {
        self.ranked
            .iter()
            .find(|e| e.condition.evaluate(inventory))
            .unwrap_or(&self.fallback)
    }

    /// Which ending an inventory leads to.
    pub fn kind_for(&self, inventory: &[Item]) -> EndingKind {
        self.select(inventory).kind
    }

    /// Resolve the ending for a finished session.
    ///
    /// Pure: the state is only read, so resolving twice gives the same result.
    pub fn resolve(&self, state: &SessionState) -> Resolution {
        let ending = self.select(&state.inventory);
        let name = state.player_name.as_str();

        let mut lines: Vec<String> = ending
            .arrival
            .iter()
            .map(|line| render_line(line, name))
            .collect();

        lines.push(String::new());
        lines.push(SUMMARY_HEADER.to_string());
        lines.push(format!("Name: {name}"));
        lines.push(format!("Places visited: {}", state.visited_count()));
        lines.push(format!("Items collected: {}", items_line(&state.inventory)));

        lines.push(String::new());
        lines.push(format!("Ending: {}", ending.title));
        lines.extend(ending.closing.iter().map(|line| render_line(line, name)));

        lines.push(String::new());
        lines.push(THANKS.to_string());

        Resolution {
            kind: ending.kind,
            lines,
        }
    }
}

/// Inventory as a comma-separated list, or `None` when empty.
pub fn items_line(inventory: &[Item]) -> String {
    if inventory.is_empty() {
        return "None".to_string();
    }
    inventory
        .iter()
        .map(|item| item.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> EndingResolver {
        EndingResolver::new(
            vec![
                Ending::new(
                    EndingKind::Guardian,
                    Condition::has(Item::GuardianBlessing),
                    "Guardian of the Forest",
                )
                .arrival(&["{name}, you have become a Guardian!"]),
            ],
            Ending::new(EndingKind::Explorer, Condition::Always, "Forest Explorer")
                .closing(&["Return again."]),
        )
    }

    #[test]
    fn ranked_before_fallback() {
        let resolver = resolver();
        assert_eq!(
            resolver.kind_for(&[Item::GuardianBlessing]),
            EndingKind::Guardian
        );
        assert_eq!(resolver.kind_for(&[]), EndingKind::Explorer);
        assert_eq!(resolver.endings().count(), 2);
    }

    #[test]
    fn resolution_lines() {
        let mut state = SessionState::new();
        state.set_player_name("rowan");
        state.mark_visited("forest_entrance");
        state.mark_visited("forest_heart");
        state.add_item(Item::GuardianBlessing);

        let resolution = resolver().resolve(&state);

        assert_eq!(resolution.kind, EndingKind::Guardian);
        assert_eq!(
            resolution.lines,
            vec![
                "rowan, you have become a Guardian!",
                "",
                SUMMARY_HEADER,
                "Name: rowan",
                "Places visited: 2",
                "Items collected: guardian blessing",
                "",
                "Ending: Guardian of the Forest",
                "",
                THANKS,
            ]
        );
    }

    #[test]
    fn empty_inventory_is_none() {
        assert_eq!(items_line(&[]), "None");
        assert_eq!(
            items_line(&[Item::CrystalWand, Item::ForestTongue]),
            "crystal wand, forest tongue"
        );
    }

    #[test]
    fn keys() {
        assert_eq!(EndingKind::Mage.key(), "mage");
        assert_eq!(EndingKind::Explorer.to_string(), "explorer");
    }
}
