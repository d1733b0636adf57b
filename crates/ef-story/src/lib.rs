//! Scene graph engine for The Enchanted Forest Adventure.
//!
//! The story is authored as data: scenes with condition-gated variants,
//! player options with effects, and transitions that may depend on what the
//! player carries. A single generic engine interprets that graph one scene at
//! a time, a resolver picks one of the endings, and a session drives the whole
//! playthrough against pluggable input and output collaborators.

/// Choice options, conditions, effects and transitions.
pub mod choice;
/// Presentation settings for frontends.
pub mod config;
/// The interpreter that executes one scene per step.
pub mod engine;
/// Endings and the resolver that picks one.
pub mod ending;
/// Error types for the story engine.
pub mod error;
/// The authored Enchanted Forest content.
pub mod forest;
/// The scene graph and its integrity checks.
pub mod graph;
/// Output sink and input source collaborators.
pub mod io;
/// Collectible items.
pub mod item;
/// Prompting and input validation.
pub mod prompt;
/// Scenes and their variants.
pub mod scene;
/// The playthrough driver.
pub mod session;
/// Mutable state of one playthrough.
pub mod state;

pub use choice::{Beat, ChoiceOption, Condition, Effect, Route, Target, Transition};
pub use config::{Pacing, StoryConfig};
pub use engine::{StepResult, StoryEngine};
pub use ending::{Ending, EndingKind, EndingResolver, Resolution};
pub use error::{StoryError, StoryResult};
pub use graph::SceneGraph;
pub use io::{InputSource, LineInput, OutputSink, RecordingOutput, ScriptedInput};
pub use item::Item;
pub use prompt::{Prompter, Reply};
pub use scene::{Scene, Step, Variant};
pub use session::{Session, SessionOutcome};
pub use state::{ChoiceRecord, SessionState};
