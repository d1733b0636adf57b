use std::io;

use tracing::debug;

use ef_story::{LineInput, Prompter, Session, StoryConfig};

use crate::terminal::TerminalOutput;

pub fn run(config: StoryConfig) -> Result<(), String> {
    let mut session = Session::forest().map_err(|e| format!("failed to start session: {e}"))?;

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock());
    let mut output = TerminalOutput::new(io::stdout(), config.pacing);
    let mut prompter = Prompter::new(&mut input, &mut output);

    let outcome = session.run(&mut prompter).map_err(|e| e.to_string())?;
    debug!(?outcome, "story over");
    Ok(())
}
