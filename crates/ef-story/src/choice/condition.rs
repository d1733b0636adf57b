//! Condition evaluation for scene variants and transitions.

use serde::Serialize;

use crate::item::Item;

/// A condition that can be evaluated against the player's inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Check if the player carries an item.
    HasItem(Item),
    /// Logical AND.
    And(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// True when the inventory contains `item`.
    pub fn has(item: Item) -> Self {
        Condition::HasItem(item)
    }

    /// True when the inventory contains every one of `items`.
    pub fn has_all(items: &[Item]) -> Self {
        Condition::And(items.iter().copied().map(Condition::HasItem).collect())
    }

    /// Evaluate the condition against an inventory.
    pub fn evaluate(&self, inventory: &[Item]) -> bool {
        match self {
            Condition::HasItem(item) => inventory.contains(item),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(inventory)),
            Condition::Always => true,
        }
    }

    /// Whether this condition holds for every inventory by construction.
    pub fn is_unconditional(&self) -> bool {
        matches!(self, Condition::Always)
    }
}
