//! Full playthroughs of the Enchanted Forest driven by scripted input.

use ef_story::forest::{EARLY_FAREWELL, FOREST_HEART, MYSTERIOUS_CAVE};
use ef_story::prompt::{INVALID_CHOICE, STOP_FAREWELL};
use ef_story::{
    EndingKind, Item, Prompter, RecordingOutput, ScriptedInput, Session, SessionOutcome,
    SessionState, StepResult, StoryEngine,
};

fn play(replies: &[&str]) -> (Session, SessionOutcome, RecordingOutput) {
    let mut session = Session::forest().unwrap();
    let mut input = ScriptedInput::new(replies.iter().copied());
    let mut output = RecordingOutput::new();
    let outcome = {
        let mut prompter = Prompter::new(&mut input, &mut output);
        session.run(&mut prompter).unwrap()
    };
    (session, outcome, output)
}

fn arrive_at_heart(inventory: &[Item]) -> (StepResult, SessionState) {
    let engine = StoryEngine::forest().unwrap();
    let mut state = SessionState::starting_at(FOREST_HEART);
    state.set_player_name("rowan");
    for item in inventory {
        state.add_item(*item);
    }

    let mut input = ScriptedInput::default();
    let mut output = RecordingOutput::new();
    let mut prompter = Prompter::new(&mut input, &mut output);
    let result = engine.execute_current_scene(&mut state, &mut prompter).unwrap();
    (result, state)
}

// ---------------------------------------------------------------------------
// endings
// ---------------------------------------------------------------------------

#[test]
fn empty_inventory_at_heart_is_explorer() {
    let (result, _) = arrive_at_heart(&[]);
    assert_eq!(result, StepResult::Reached(EndingKind::Explorer));
}

#[test]
fn wand_and_tongue_at_heart_is_mage() {
    let (result, _) = arrive_at_heart(&[Item::ForestTongue, Item::CrystalWand]);
    assert_eq!(result, StepResult::Reached(EndingKind::Mage));
}

#[test]
fn blessing_at_heart_is_guardian() {
    let (result, _) = arrive_at_heart(&[
        Item::CrystalWand,
        Item::ForestTongue,
        Item::GuardianBlessing,
    ]);
    assert_eq!(result, StepResult::Reached(EndingKind::Guardian));
}

#[test]
fn resolving_twice_is_identical() {
    let engine = StoryEngine::forest().unwrap();
    let (_, state) = arrive_at_heart(&[Item::ForestTongue, Item::CrystalWand]);

    let first = engine.endings().resolve(&state);
    let second = engine.endings().resolve(&state);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// full playthroughs
// ---------------------------------------------------------------------------

#[test]
fn mage_playthrough() {
    let (session, outcome, output) = play(&[
        "Rowan",
        "cave",
        "follow sound",
        "take wand",
        "exit cave",
        "approach fountain",
        "yes",
        "heart of forest",
    ]);
    let state = session.state();

    assert_eq!(outcome, SessionOutcome::Completed(EndingKind::Mage));
    assert_eq!(state.inventory, vec![Item::CrystalWand, Item::ForestTongue]);
    assert_eq!(state.visited_count(), 7);
    assert_eq!(state.choice_log.len(), 7);
    assert!(!state.active);

    assert!(output.contains("rowan, you have become a Mage of the Enchanted Forest!"));
    assert!(output.contains("Places visited: 7"));
    assert!(output.contains("Items collected: crystal wand, forest tongue"));
    assert!(output.contains("Ending: Forest Mage"));
    assert!(output.contains("Thank you for playing THE ENCHANTED FOREST ADVENTURE!"));
    assert!(!output.contains(EARLY_FAREWELL));
}

#[test]
fn guardian_playthrough() {
    let (session, outcome, output) = play(&[
        "rowan",
        "cave",
        "follow sound",
        "take wand",
        "examine symbols",
        "find guardian",
        "need help",
    ]);
    let state = session.state();

    assert_eq!(outcome, SessionOutcome::Completed(EndingKind::Guardian));
    assert_eq!(
        state.inventory,
        vec![
            Item::CrystalWand,
            Item::GuardianKnowledge,
            Item::GuardianBlessing
        ]
    );
    assert_eq!(state.visited_count(), 6);
    assert_eq!(state.choice_log.len(), 6);
    assert!(output.contains("Ending: Guardian of the Forest"));
    assert!(output.contains("Items collected: crystal wand, guardian knowledge, guardian blessing"));
}

#[test]
fn wand_without_blessing_is_explorer() {
    let (session, outcome, output) = play(&[
        "rowan",
        "cave",
        "follow sound",
        "take wand",
        "examine symbols",
        "find guardian",
        "seek knowledge",
    ]);

    assert_eq!(outcome, SessionOutcome::Completed(EndingKind::Explorer));
    assert!(!session.state().has_item(Item::GuardianBlessing));
    assert!(output.contains("rowan, your adventure in the Enchanted Forest has only just begun!"));
}

#[test]
fn stop_at_first_prompt() {
    let (session, outcome, output) = play(&["stop"]);
    let state = session.state();

    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(!state.active);
    assert!(state.visited.is_empty());
    assert!(state.choice_log.is_empty());
    assert!(state.player_name.is_empty());
    assert!(output.contains(STOP_FAREWELL));
    assert!(output.contains(EARLY_FAREWELL));
}

#[test]
fn examining_symbols_without_wand_returns_to_cave() {
    let (session, outcome, output) = play(&["rowan", "cave", "examine symbols", "stop"]);
    let state = session.state();

    assert_eq!(outcome, SessionOutcome::Quit);
    assert_eq!(state.current_scene, MYSTERIOUS_CAVE);
    assert!(state.visited.contains("ancient_language"));
    assert_eq!(state.choice_log.len(), 2);
    assert_eq!(state.choice_log[1].token, "examine symbols");
    assert_eq!(
        output.count("The cave is darker than expected but surprisingly warm."),
        2
    );
}

#[test]
fn fairy_without_tongue_falls_back_to_clearing() {
    let (session, _, output) = play(&["rowan", "path", "talk to fairy", "stop"]);
    let state = session.state();

    assert_eq!(state.current_scene, "forest_clearing");
    assert_eq!(state.visited_count(), 3);
    assert_eq!(state.choice_log.len(), 2);
    assert!(output.contains("The fairy makes melodic sounds you cannot understand."));
}

#[test]
fn invalid_choices_are_reprompted() {
    let (session, _, output) = play(&["rowan", "north", "PATH", "stop"]);

    assert_eq!(output.count(INVALID_CHOICE), 1);
    assert_eq!(session.state().choice_log[0].token, "path");
}

#[test]
fn revisiting_counts_once() {
    let (session, _, _) = play(&[
        "rowan",
        "cave",
        "follow sound",
        "leave chamber",
        "follow sound",
        "leave chamber",
        "stop",
    ]);
    let state = session.state();

    assert_eq!(state.visited_count(), 3);
    assert_eq!(state.choice_log.len(), 5);
}
