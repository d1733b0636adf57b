//! Invariants that must hold over any walk through the forest.

use std::collections::BTreeSet;

use proptest::prelude::*;

use ef_story::{
    EndingKind, Item, Prompter, RecordingOutput, ScriptedInput, SessionState, Step, StepResult,
    StoryEngine,
};

fn any_item() -> impl Strategy<Value = Item> {
    prop::sample::select(Item::ALL.to_vec())
}

proptest! {
    #[test]
    fn random_walks_keep_invariants(picks in prop::collection::vec(0usize..3, 1..80)) {
        let engine = StoryEngine::forest().unwrap();
        let mut state = SessionState::new();
        state.set_player_name("rowan");

        let mut entered = BTreeSet::new();
        let mut option_steps = 0;

        for pick in picks {
            if !state.active {
                break;
            }

            let scene = engine.graph().scene(&state.current_scene).unwrap();
            let variant = scene.select_variant(&state.inventory).unwrap();
            let replies = match &variant.step {
                Step::Choose { options, .. } => {
                    option_steps += 1;
                    vec![options[pick % options.len()].token.clone()]
                }
                Step::FallThrough(_) => Vec::new(),
            };
            entered.insert(state.current_scene.clone());

            let visited_before = state.visited.clone();
            let inventory_before = state.inventory.len();

            let mut input = ScriptedInput::new(replies);
            let mut output = RecordingOutput::new();
            let result = {
                let mut prompter = Prompter::new(&mut input, &mut output);
                engine.execute_current_scene(&mut state, &mut prompter).unwrap()
            };

            prop_assert!(visited_before.is_subset(&state.visited));
            prop_assert!(state.inventory.len() >= inventory_before);
            prop_assert_eq!(&state.visited, &entered);
            prop_assert_eq!(state.choice_log.len(), option_steps);
            prop_assert_ne!(result.clone(), StepResult::Quit);

            if let StepResult::Reached(kind) = result {
                prop_assert_eq!(kind, engine.endings().kind_for(&state.inventory));
                state.stop();
            }
        }
    }

    #[test]
    fn blessing_always_wins(mut inventory in prop::collection::vec(any_item(), 0..8), at in 0usize..8) {
        let engine = StoryEngine::forest().unwrap();
        let at = at.min(inventory.len());
        inventory.insert(at, Item::GuardianBlessing);

        prop_assert_eq!(engine.endings().kind_for(&inventory), EndingKind::Guardian);
    }

    #[test]
    fn resolution_is_idempotent(inventory in prop::collection::vec(any_item(), 0..8)) {
        let engine = StoryEngine::forest().unwrap();
        let mut state = SessionState::new();
        state.set_player_name("rowan");
        state.inventory = inventory;

        let first = engine.endings().resolve(&state);
        let second = engine.endings().resolve(&state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_inventory_matches_a_variant(inventory in prop::collection::vec(any_item(), 0..8)) {
        let engine = StoryEngine::forest().unwrap();
        for scene in engine.graph().scenes() {
            prop_assert!(scene.select_variant(&inventory).is_some());
        }
    }
}
