//! The playthrough driver.

use tracing::{debug, info};

use crate::choice::Beat;
use crate::engine::{StepResult, StoryEngine};
use crate::ending::EndingKind;
use crate::error::StoryResult;
use crate::forest::{EARLY_FAREWELL, INTRODUCTION, NAME_PROMPT, TITLE, TITLE_RULE};
use crate::prompt::{Prompter, Reply};
use crate::state::SessionState;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player reached an ending.
    Completed(EndingKind),
    /// The player stopped, or the input ended.
    Quit,
}

/// One playthrough from introduction to quit or ending.
pub struct Session {
    engine: StoryEngine,
    state: SessionState,
}

impl Session {
    /// Create a session at the engine's start scene.
    pub fn new(engine: StoryEngine) -> Self {
        let state = SessionState::starting_at(engine.graph().start());
        Self { engine, state }
    }

    /// A session in the Enchanted Forest.
    pub fn forest() -> StoryResult<Self> {
        Ok(Self::new(StoryEngine::forest()?))
    }

    /// The player state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the session to completion.
    ///
    /// Only graph integrity errors are returned; stopping early is a normal
    /// outcome.
    pub fn run(&mut self, prompter: &mut Prompter<'_>) -> StoryResult<SessionOutcome> {
        let outcome = if self.introduction(prompter) {
            self.play(prompter)?
        } else {
            SessionOutcome::Quit
        };

        if outcome == SessionOutcome::Quit
            && !self.engine.graph().is_terminal(&self.state.current_scene)
        {
            prompter.say("");
            prompter.say(EARLY_FAREWELL);
        }

        info!(
            ?outcome,
            visited = self.state.visited_count(),
            choices = self.state.choice_log.len(),
            "session finished"
        );
        Ok(outcome)
    }

    /// Show the title and learn the player's name. False if the player stopped.
    fn introduction(&mut self, prompter: &mut Prompter<'_>) -> bool {
        prompter.heading(TITLE);
        prompter.rule(TITLE_RULE);
        prompter.pause(Beat::Brief);
        for line in INTRODUCTION {
            prompter.say(line);
        }
        prompter.pause(Beat::Short);

        match prompter.ask(NAME_PROMPT, None) {
            Reply::Stop => {
                self.state.stop();
                prompter.farewell();
                false
            }
            Reply::Token(name) => {
                self.state.set_player_name(name);
                prompter.say("");
                prompter.say(&format!(
                    "Welcome, {}! Your adventure awaits...",
                    self.state.player_name
                ));
                prompter.pause(Beat::Short);
                true
            }
        }
    }

    fn play(&mut self, prompter: &mut Prompter<'_>) -> StoryResult<SessionOutcome> {
        while self.state.active {
            match self.engine.execute_current_scene(&mut self.state, prompter)? {
                StepResult::Continue(next) => debug!(scene = %next, "continuing"),
                StepResult::Quit => return Ok(SessionOutcome::Quit),
                StepResult::Reached(_) => {
                    let resolution = self.engine.endings().resolve(&self.state);
                    for line in &resolution.lines {
                        prompter.say(line);
                    }
                    self.state.stop();
                    return Ok(SessionOutcome::Completed(resolution.kind));
                }
            }
        }
        Ok(SessionOutcome::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{RecordingOutput, ScriptedInput};
    use crate::prompt::STOP_FAREWELL;

    fn run(replies: &[&str]) -> (Session, SessionOutcome, RecordingOutput) {
        let mut session = Session::forest().unwrap();
        let mut input = ScriptedInput::new(replies.iter().copied());
        let mut output = RecordingOutput::new();
        let outcome = {
            let mut prompter = Prompter::new(&mut input, &mut output);
            session.run(&mut prompter).unwrap()
        };
        (session, outcome, output)
    }

    #[test]
    fn introduction_greets_by_name() {
        let (session, _, output) = run(&["Rowan", "stop"]);

        assert_eq!(output.lines()[0], TITLE);
        assert_eq!(output.lines()[1], TITLE_RULE);
        assert!(output.contains("Welcome, rowan! Your adventure awaits..."));
        assert_eq!(session.state().player_name, "rowan");
        assert_eq!(output.pauses(), &[Beat::Brief, Beat::Short, Beat::Short]);
    }

    #[test]
    fn empty_name_is_asked_again() {
        let (session, _, output) = run(&["", "  ", "ash", "stop"]);

        assert_eq!(output.count("Please enter a valid name."), 2);
        assert_eq!(session.state().player_name, "ash");
    }

    #[test]
    fn stop_at_name_prompt() {
        let (session, outcome, output) = run(&["stop"]);

        assert_eq!(outcome, SessionOutcome::Quit);
        assert!(!session.state().active);
        assert!(session.state().visited.is_empty());
        assert!(output.contains(STOP_FAREWELL));
        assert!(output.contains(EARLY_FAREWELL));
    }

    #[test]
    fn end_of_input_quits_gracefully() {
        let (session, outcome, output) = run(&["rowan", "path"]);

        assert_eq!(outcome, SessionOutcome::Quit);
        assert_eq!(session.state().current_scene, "forest_clearing");
        assert!(output.contains(EARLY_FAREWELL));
    }

    #[test]
    fn completed_session_skips_early_farewell() {
        let (session, outcome, output) = run(&[
            "rowan",
            "path",
            "approach fountain",
            "yes",
            "heart of forest",
        ]);

        assert_eq!(outcome, SessionOutcome::Completed(EndingKind::Explorer));
        assert!(!session.state().active);
        assert!(!output.contains(EARLY_FAREWELL));
        assert!(output.contains("Ending: Forest Explorer"));
    }
}
