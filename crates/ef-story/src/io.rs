//! Output sink and input source collaborators.
//!
//! The engine never touches stdin or stdout directly. Frontends implement
//! these traits; tests use [`ScriptedInput`] and [`RecordingOutput`].

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::choice::Beat;

/// Renders text to the player.
pub trait OutputSink {
    /// Render one logical line.
    fn write_line(&mut self, line: &str);

    /// Render a title line. Defaults to a plain line.
    fn write_heading(&mut self, line: &str) {
        self.write_line(line);
    }

    /// Render the rule under a title. Defaults to a heading.
    fn write_rule(&mut self, line: &str) {
        self.write_heading(line);
    }

    /// Render a validation notice. Defaults to a plain line.
    fn write_notice(&mut self, line: &str) {
        self.write_line(line);
    }

    /// Pause for a beat. Cosmetic only; the default does not wait.
    fn pause(&mut self, _beat: Beat) {}

    /// Signal that input is about to be read.
    fn await_input(&mut self) {}
}

/// Supplies raw player input, one line at a time.
pub trait InputSource {
    /// Read the next line. `Ok(None)` means the input has ended.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// An input source over any buffered reader, such as a locked stdin.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// a stray encoding fails validation instead of closing the input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        }
    }
}

/// Replays a fixed list of replies, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    replies: VecDeque<String>,
}

impl ScriptedInput {
    /// Create a script from replies in the order they will be read.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.replies.pop_front())
    }
}

/// Collects every rendered line in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    lines: Vec<String>,
    pauses: Vec<Beat>,
    prompts: usize,
}

impl RecordingOutput {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines, in render order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every pause, in order.
    pub fn pauses(&self) -> &[Beat] {
        &self.pauses
    }

    /// How many times input was awaited.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Whether any line equals `line` exactly.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// How many lines equal `line` exactly.
    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| *l == line).count()
    }
}

impl OutputSink for RecordingOutput {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn pause(&mut self, beat: Beat) {
        self.pauses.push(beat);
    }

    fn await_input(&mut self) {
        self.prompts += 1;
    }
}
