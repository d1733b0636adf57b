//! Typing-effect output for a real terminal.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use tracing::warn;

use ef_story::{Beat, OutputSink, Pacing};

/// Writes the story one character at a time.
pub struct TerminalOutput<W: Write> {
    out: W,
    pacing: Pacing,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(out: W, pacing: Pacing) -> Self {
        Self { out, pacing }
    }

    fn type_out(
        &mut self,
        text: &str,
        delay: Duration,
        paint: fn(&str) -> ColoredString,
    ) -> io::Result<()> {
        if delay.is_zero() {
            writeln!(self.out, "{}", paint(text))?;
            return self.out.flush();
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            write!(self.out, "{}", paint(ch.encode_utf8(&mut buf)))?;
            self.out.flush()?;
            thread::sleep(delay);
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn emit(&mut self, text: &str, delay: Duration, paint: fn(&str) -> ColoredString) {
        if let Err(e) = self.type_out(text, delay, paint) {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> OutputSink for TerminalOutput<W> {
    fn write_line(&mut self, line: &str) {
        self.emit(line, self.pacing.char_delay, |s| s.normal());
    }

    fn write_heading(&mut self, line: &str) {
        self.emit(line, self.pacing.heading_char_delay, |s| s.bold());
    }

    fn write_rule(&mut self, line: &str) {
        self.emit(line, self.pacing.rule_char_delay, |s| s.bold());
    }

    fn write_notice(&mut self, line: &str) {
        self.emit(line, self.pacing.char_delay, |s| s.yellow());
    }

    fn pause(&mut self, beat: Beat) {
        let delay = self.pacing.beat(beat);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn await_input(&mut self) {
        let prompt = write!(self.out, "> ").and_then(|()| self.out.flush());
        if let Err(e) = prompt {
            warn!(error = %e, "failed to write prompt");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut TerminalOutput<Vec<u8>>)) -> String {
        colored::control::set_override(false);
        let mut term = TerminalOutput::new(Vec::new(), Pacing::instant());
        f(&mut term);
        String::from_utf8(term.out).unwrap()
    }

    #[test]
    fn instant_lines() {
        let text = render(|t| {
            t.write_line("The path opens into a sunlit clearing.");
            t.write_line("");
        });
        assert_eq!(text, "The path opens into a sunlit clearing.\n\n");
    }

    #[test]
    fn prompt_marker_has_no_newline() {
        let text = render(|t| t.await_input());
        assert_eq!(text, "> ");
    }

    #[test]
    fn typed_output_matches_instant() {
        colored::control::set_override(false);
        let pacing = Pacing {
            char_delay: Duration::from_millis(1),
            heading_char_delay: Duration::from_millis(1),
            rule_char_delay: Duration::from_millis(1),
            ..Pacing::instant()
        };
        let mut term = TerminalOutput::new(Vec::new(), pacing);
        term.write_heading("THE ENCHANTED FOREST");
        term.write_rule("====");
        term.pause(Beat::Long);
        term.write_notice("naïve");
        assert_eq!(
            String::from_utf8(term.out).unwrap(),
            "THE ENCHANTED FOREST\n====\nnaïve\n"
        );
    }
}
