//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while building or running a story.
///
/// Player input never produces one of these: invalid tokens are handled by
/// re-prompting. Every variant points at a defect in the authored graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    /// The current scene id is not part of the graph.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A transition leads to a scene that does not exist.
    #[error("scene '{from}' leads to unknown scene '{to}'")]
    UnknownTarget {
        /// Scene the transition belongs to.
        from: String,
        /// Missing destination.
        to: String,
    },

    /// No variant of the scene accepts the current inventory.
    #[error("no variant of scene '{0}' matches the current inventory")]
    NoMatchingVariant(String),

    /// No route of a transition accepts the current inventory.
    #[error("no route out of scene '{0}' matches the current inventory")]
    NoMatchingRoute(String),

    /// Two scenes share the same id.
    #[error("scene defined twice: {0}")]
    DuplicateScene(String),

    /// A scene or transition lacks its unconditional last entry.
    #[error("scene '{scene}' has no unconditional {what}")]
    MissingFallback {
        /// Offending scene.
        scene: String,
        /// Either "variant" or "route".
        what: &'static str,
    },

    /// An option set is empty, repeats a token, or uses a reserved token.
    #[error("scene '{scene}' has an invalid option: {reason}")]
    InvalidOption {
        /// Offending scene.
        scene: String,
        /// What is wrong with it.
        reason: String,
    },
}
