//! Presentation settings for frontends.
//!
//! Pacing is purely cosmetic: it controls how fast a terminal prints the
//! story and never affects game logic.

use std::time::Duration;

use crate::choice::Beat;

/// Typing speed and dramatic pauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after each character of body text.
    pub char_delay: Duration,
    /// Delay after each character of a title line.
    pub heading_char_delay: Duration,
    /// Delay after each character of the rule under a title.
    pub rule_char_delay: Duration,
    /// Length of a [`Beat::Brief`] pause.
    pub brief_pause: Duration,
    /// Length of a [`Beat::Short`] pause.
    pub short_pause: Duration,
    /// Length of a [`Beat::Long`] pause.
    pub long_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(10),
            heading_char_delay: Duration::from_millis(50),
            rule_char_delay: Duration::from_millis(20),
            brief_pause: Duration::from_millis(500),
            short_pause: Duration::from_secs(1),
            long_pause: Duration::from_secs(2),
        }
    }
}

impl Pacing {
    /// No delays and no pauses.
    pub fn instant() -> Self {
        Self {
            char_delay: Duration::ZERO,
            heading_char_delay: Duration::ZERO,
            rule_char_delay: Duration::ZERO,
            brief_pause: Duration::ZERO,
            short_pause: Duration::ZERO,
            long_pause: Duration::ZERO,
        }
    }

    /// Whether text is printed without any delay or pause.
    pub fn is_instant(&self) -> bool {
        *self == Self::instant()
    }

    /// How long a beat lasts.
    pub fn beat(&self, beat: Beat) -> Duration {
        match beat {
            Beat::Brief => self.brief_pause,
            Beat::Short => self.short_pause,
            Beat::Long => self.long_pause,
        }
    }
}

/// Configuration for a story frontend.
#[derive(Debug, Clone, Default)]
pub struct StoryConfig {
    /// Typing effect settings.
    pub pacing: Pacing,
}

impl StoryConfig {
    /// Disable the typing effect and the pauses.
    pub fn instant(mut self) -> Self {
        self.pacing = Pacing::instant();
        self
    }

    /// Set the per-character delay in milliseconds.
    ///
    /// Titles keep their default ratio of five times the body delay, rules
    /// twice. Pauses are unchanged.
    pub fn with_char_delay_ms(mut self, ms: u64) -> Self {
        self.pacing.char_delay = Duration::from_millis(ms);
        self.pacing.heading_char_delay = Duration::from_millis(ms.saturating_mul(5));
        self.pacing.rule_char_delay = Duration::from_millis(ms.saturating_mul(2));
        self
    }
}
