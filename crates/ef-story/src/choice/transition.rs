//! Transitions from one scene to the next.
//!
//! A transition is a list of routes checked in order against the inventory
//! as it stands after the option's effects. The last route is expected to be
//! unconditional so that resolution is total.

use serde::Serialize;

use super::condition::Condition;
use crate::item::Item;

/// Where a route leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Another scene, by id.
    Scene(String),
    /// Hand over to the ending resolver.
    Ending,
}

/// One guarded destination of a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Condition over the inventory.
    pub condition: Condition,
    /// Text rendered when this route is taken.
    pub lines: Vec<String>,
    /// Destination.
    pub target: Target,
}

impl Route {
    /// An unconditional route to a scene.
    pub fn to(scene_id: impl Into<String>) -> Self {
        Self {
            condition: Condition::Always,
            lines: Vec::new(),
            target: Target::Scene(scene_id.into()),
        }
    }

    /// An unconditional route to the ending resolver.
    pub fn ending() -> Self {
        Self {
            condition: Condition::Always,
            lines: Vec::new(),
            target: Target::Ending,
        }
    }

    /// Guard this route with a condition.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Guard this route on carrying an item.
    pub fn when_holding(self, item: Item) -> Self {
        self.when(Condition::has(item))
    }

    /// Add lines rendered when this route is taken.
    pub fn narrate_lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|line| line.to_string()));
        self
    }
}

/// An ordered set of routes; the first matching route wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Routes in priority order.
    pub routes: Vec<Route>,
}

impl Transition {
    /// A transition with a single unconditional route to a scene.
    pub fn to(scene_id: impl Into<String>) -> Self {
        Self::new().route(Route::to(scene_id))
    }

    /// A transition that always ends the story.
    pub fn ending() -> Self {
        Self::new().route(Route::ending())
    }

    /// An empty transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Pick the first route whose condition holds for the inventory.
    pub fn resolve(&self, inventory: &[Item]) -> Option<&Route> {
        self.routes.iter().find(|r| r.condition.evaluate(inventory))
    }

    /// Whether resolution always succeeds.
    pub fn has_fallback(&self) -> bool {
        self.routes
            .last()
            .is_some_and(|r| r.condition.is_unconditional())
    }

    /// Scene ids this transition can lead to.
    pub fn scene_targets(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().filter_map(|r| match &r.target {
            Target::Scene(id) => Some(id.as_str()),
            Target::Ending => None,
        })
    }

    /// Whether every route ends the story.
    pub fn always_ends(&self) -> bool {
        !self.routes.is_empty() && self.routes.iter().all(|r| r.target == Target::Ending)
    }
}
