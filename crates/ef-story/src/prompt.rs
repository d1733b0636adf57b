//! Prompting and input validation.
//!
//! [`Prompter`] owns the validation loop: it keeps asking until it gets a
//! token from the allowed set, and turns `stop`, end of input and read
//! failures into a single [`Reply::Stop`] interrupt. Undecodable input is
//! treated like any other invalid answer.

use std::io::ErrorKind;

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::choice::Beat;
use crate::io::{InputSource, OutputSink};

/// The token that ends the session from any prompt.
pub const STOP_TOKEN: &str = "stop";

/// Shown after an unrecognized option.
pub const INVALID_CHOICE: &str = "That's not a valid choice. Please try again.";

/// Shown after an empty free-text answer.
pub const EMPTY_ANSWER: &str = "Please enter a valid name.";

/// Shown when the player stops the story.
pub const STOP_FAREWELL: &str = "You've chosen to stop the story. Goodbye!";

/// Minimum similarity score for a "did you mean" hint (0.0-1.0).
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The outcome of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A validated, lowercase token.
    Token(String),
    /// The player asked to stop, or the input ended.
    Stop,
}

/// Pairs an input source with an output sink and enforces input validation.
pub struct Prompter<'a> {
    input: &'a mut dyn InputSource,
    output: &'a mut dyn OutputSink,
}

impl<'a> Prompter<'a> {
    /// Create a prompter over the given collaborators.
    pub fn new(input: &'a mut dyn InputSource, output: &'a mut dyn OutputSink) -> Self {
        Self { input, output }
    }

    /// Render a line.
    pub fn say(&mut self, line: &str) {
        self.output.write_line(line);
    }

    /// Render a title line.
    pub fn heading(&mut self, line: &str) {
        self.output.write_heading(line);
    }

    /// Render the rule under a title.
    pub fn rule(&mut self, line: &str) {
        self.output.write_rule(line);
    }

    /// Pause for a beat.
    pub fn pause(&mut self, beat: Beat) {
        self.output.pause(beat);
    }

    /// Render the farewell shown when the player stops.
    pub fn farewell(&mut self) {
        self.say("");
        self.say(STOP_FAREWELL);
    }

    /// Ask a question and wait for a valid answer.
    ///
    /// With `options`, only those tokens (case-insensitive) are accepted.
    /// Without, any non-empty answer is accepted. `stop` is always
    /// recognized and wins over any option.
    pub fn ask(&mut self, message: &str, options: Option<&[&str]>) -> Reply {
        loop {
            self.say("");
            self.say(message);
            if let Some(options) = options.filter(|o| !o.is_empty()) {
                self.say(&format!("(Choose {})", format_options(options)));
            }
            self.output.await_input();

            let token = match self.input.read_line() {
                Ok(Some(raw)) => normalize(&raw),
                Ok(None) => {
                    debug!("input ended, treating as stop");
                    return Reply::Stop;
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    debug!(error = %e, "undecodable input");
                    String::new()
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input, treating as stop");
                    return Reply::Stop;
                }
            };

            if token == STOP_TOKEN {
                return Reply::Stop;
            }

            match options {
                Some(options) => {
                    if let Some(found) = options.iter().find(|o| o.eq_ignore_ascii_case(&token)) {
                        return Reply::Token(found.to_lowercase());
                    }
                    debug!(%token, "rejected invalid choice");
                    self.output.write_notice(INVALID_CHOICE);
                    if let Some(hint) = suggest(&token, options) {
                        self.output.write_notice(&format!("Did you mean '{hint}'?"));
                    }
                }
                None if token.is_empty() => self.output.write_notice(EMPTY_ANSWER),
                None => return Reply::Token(token),
            }
        }
    }
}

/// Trim and lowercase raw input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Format options as a list: `'a'`, `'a', or 'b'`, `'a', 'b', or 'c'`.
pub fn format_options(options: &[&str]) -> String {
    match options {
        [] => String::new(),
        [only] => format!("'{only}'"),
        [rest @ .., last] => {
            let head: Vec<String> = rest.iter().map(|o| format!("'{o}'")).collect();
            format!("{}, or '{last}'", head.join(", "))
        }
    }
}

/// Find the option closest to a mistyped token, if any is close enough.
pub fn suggest<'o>(token: &str, options: &[&'o str]) -> Option<&'o str> {
    if token.is_empty() {
        return None;
    }

    options
        .iter()
        .map(|option| (*option, jaro_winkler(token, &option.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(option, _)| option)
}
