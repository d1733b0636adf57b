//! Choice engine for branching narratives.
//!
//! This module provides player options, conditions over the inventory,
//! effects, and the transitions that pick the next scene.

mod condition;
mod effect;
mod option;
mod transition;

pub use condition::Condition;
pub use effect::{Beat, Effect};
pub use option::ChoiceOption;
pub use transition::{Route, Target, Transition};
