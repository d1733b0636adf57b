//! Items the player can carry through the forest.

use std::fmt;

use serde::Serialize;

/// A collectible item or piece of knowledge.
///
/// The set is closed so that every condition in the authored graph refers to
/// something that can actually be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// Granted by drinking from the magic fountain.
    ForestTongue,
    /// Taken from the pedestal in the crystal chamber.
    CrystalWand,
    /// Learned by reading the runes with the crystal wand in hand.
    GuardianKnowledge,
    /// Bestowed by the ancient tree when asked for help.
    GuardianBlessing,
}

impl Item {
    /// Every item, in the order the story introduces them.
    pub const ALL: [Item; 4] = [
        Item::ForestTongue,
        Item::CrystalWand,
        Item::GuardianKnowledge,
        Item::GuardianBlessing,
    ];

    /// Name shown in inventory listings.
    pub fn name(self) -> &'static str {
        match self {
            Item::ForestTongue => "forest tongue",
            Item::CrystalWand => "crystal wand",
            Item::GuardianKnowledge => "guardian knowledge",
            Item::GuardianBlessing => "guardian blessing",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
