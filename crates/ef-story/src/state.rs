//! Mutable state of one playthrough.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::forest::FOREST_ENTRANCE;
use crate::item::Item;

/// Health every adventurer starts with.
pub const STARTING_HEALTH: u32 = 100;

/// One decision the player made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceRecord {
    /// Scene in which the choice was made.
    pub scene_id: String,
    /// The normalized token the player entered.
    pub token: String,
}

/// The player's state for a single session.
///
/// Only the engine and the session driver mutate it. Collections are
/// append-only: nothing is ever removed from the inventory, the visited set
/// or the choice log.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    /// Name chosen during the introduction.
    pub player_name: String,
    /// Health points. Carried but never consulted by the story.
    pub health: u32,
    /// Items in the order they were obtained; duplicates are kept.
    pub inventory: Vec<Item>,
    /// Scene ids entered at least once.
    pub visited: BTreeSet<String>,
    /// Every decision, in order.
    pub choice_log: Vec<ChoiceRecord>,
    /// The scene the engine will execute next.
    pub current_scene: String,
    /// False once the player quits or an ending is reached.
    pub active: bool,
}

impl SessionState {
    /// Create a fresh state at the forest entrance.
    pub fn new() -> Self {
        Self::starting_at(FOREST_ENTRANCE)
    }

    /// Create a fresh state at the given scene.
    pub fn starting_at(scene_id: impl Into<String>) -> Self {
        Self {
            player_name: String::new(),
            health: STARTING_HEALTH,
            inventory: Vec::new(),
            visited: BTreeSet::new(),
            choice_log: Vec::new(),
            current_scene: scene_id.into(),
            active: true,
        }
    }

    /// Set the player's name. Returns false if a name was already set.
    pub fn set_player_name(&mut self, name: impl Into<String>) -> bool {
        if !self.player_name.is_empty() {
            return false;
        }
        self.player_name = name.into();
        true
    }

    /// Check if the player carries an item.
    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Mark a scene as visited. Returns true on the first visit.
    pub fn mark_visited(&mut self, scene_id: &str) -> bool {
        self.visited.insert(scene_id.to_string())
    }

    /// Number of distinct scenes entered.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Append a decision to the choice log.
    pub fn record_choice(&mut self, scene_id: impl Into<String>, token: impl Into<String>) {
        self.choice_log.push(ChoiceRecord {
            scene_id: scene_id.into(),
            token: token.into(),
        });
    }

    /// End the session. No further scene will execute.
    pub fn stop(&mut self) {
        self.active = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
