//! The authored Enchanted Forest.
//!
//! Nine scenes and three endings. All prose lives here; the engine knows
//! nothing about the forest.

use crate::choice::{Beat, ChoiceOption, Condition, Effect, Route, Transition};
use crate::ending::{Ending, EndingKind, EndingResolver};
use crate::error::StoryResult;
use crate::graph::SceneGraph;
use crate::item::Item;
use crate::scene::{Scene, Variant};

/// Where every adventure begins.
pub const FOREST_ENTRANCE: &str = "forest_entrance";
/// The sunlit clearing with the fountain.
pub const FOREST_CLEARING: &str = "forest_clearing";
/// The cave with the glowing symbols.
pub const MYSTERIOUS_CAVE: &str = "mysterious_cave";
/// The fountain that grants the forest tongue.
pub const MAGIC_FOUNTAIN: &str = "magic_fountain";
/// The fairy who only speaks the forest tongue.
pub const FAIRY_ENCOUNTER: &str = "fairy_encounter";
/// The chamber holding the crystal wand.
pub const CRYSTAL_CHAMBER: &str = "crystal_chamber";
/// The runes that only the wand can translate.
pub const ANCIENT_LANGUAGE: &str = "ancient_language";
/// The guardian tree.
pub const ANCIENT_TREE: &str = "ancient_tree";
/// The heart of the forest, where every adventure ends.
pub const FOREST_HEART: &str = "forest_heart";

/// Title shown before the introduction.
pub const TITLE: &str = "THE ENCHANTED FOREST ADVENTURE";
/// Underline for the title.
pub const TITLE_RULE: &str = "================================";
/// Introduction lines after the title.
pub const INTRODUCTION: [&str; 3] = [
    "",
    "Welcome to an interactive adventure where YOUR choices shape the story!",
    "At any time, type 'stop' to end the adventure.",
];
/// Question asked to learn the player's name.
pub const NAME_PROMPT: &str = "What is your name, brave adventurer?";
/// Shown when the session ends without reaching an ending.
pub const EARLY_FAREWELL: &str =
    "Your adventure has ended. Perhaps you'll return to the Enchanted Forest another day!";

/// Build the scene graph of the Enchanted Forest.
pub fn enchanted_forest() -> StoryResult<SceneGraph> {
    let mut graph = SceneGraph::new(FOREST_ENTRANCE);
    for scene in [
        forest_entrance(),
        forest_clearing(),
        mysterious_cave(),
        magic_fountain(),
        fairy_encounter(),
        crystal_chamber(),
        ancient_language(),
        ancient_tree(),
        forest_heart(),
    ] {
        graph.insert(scene)?;
    }
    Ok(graph)
}

/// The three endings, guardian first and explorer as the fallback.
pub fn forest_endings() -> EndingResolver {
    let guardian = Ending::new(
        EndingKind::Guardian,
        Condition::has(Item::GuardianBlessing),
        "Guardian of the Forest",
    )
    .arrival(&[
        "",
        "The blessing of the guardian protects you as you approach the heart.",
        "The crystal resonates with your presence, accepting you as a friend of the forest.",
        "Knowledge and understanding flow into your mind.",
        "",
        "{name}, you have become a Guardian of the Enchanted Forest!",
    ])
    .closing(&[
        "You've earned the highest honor the forest can bestow.",
        "Your connection to this magical place will last a lifetime.",
    ]);

    let mage = Ending::new(
        EndingKind::Mage,
        Condition::has_all(&[Item::CrystalWand, Item::ForestTongue]),
        "Forest Mage",
    )
    .arrival(&[
        "",
        "Your crystal wand glows brightly as you approach the heart.",
        "With your understanding of the forest tongue, you hear whispers all around.",
        "The crystal responds to your wand, creating a bridge of light between them.",
        "",
        "{name}, you have become a Mage of the Enchanted Forest!",
    ])
    .closing(&[
        "You've unlocked powerful magical abilities and knowledge.",
        "The mysteries of nature are yours to explore.",
    ]);

    let explorer = Ending::new(EndingKind::Explorer, Condition::Always, "Forest Explorer")
        .arrival(&[
            "",
            "The heart of the forest is beautiful but mysterious to you.",
            "You sense there's much more to learn about this magical place.",
            "Perhaps with more knowledge or tools, you could unlock its secrets.",
            "",
            "{name}, your adventure in the Enchanted Forest has only just begun!",
        ])
        .closing(&[
            "You've only scratched the surface of what the forest holds.",
            "Return again with more knowledge to discover deeper secrets.",
        ]);

    EndingResolver::new(vec![guardian, mage], explorer)
}

/// An option that narrates a blank line and one sentence, then moves on.
fn walk(token: &str, line: &str, to: &str) -> ChoiceOption {
    ChoiceOption::new(token, Transition::to(to))
        .narrate_lines(&["", line])
        .pause(Beat::Short)
}

fn forest_entrance() -> Scene {
    Scene::new(FOREST_ENTRANCE).variant(
        Variant::otherwise()
            .lines(&[
                "",
                "{name}, you stand at the entrance of the Enchanted Forest.",
                "Ancient trees tower above you, their leaves shimmering with an odd blue glow.",
                "A worn path leads deeper into the forest, while a small cave sits to your right.",
            ])
            .choose(
                "Which way do you go?",
                vec![
                    walk(
                        "path",
                        "You decide to follow the path deeper into the forest...",
                        FOREST_CLEARING,
                    ),
                    walk(
                        "cave",
                        "You cautiously approach the mysterious cave...",
                        MYSTERIOUS_CAVE,
                    ),
                ],
            ),
    )
}

fn forest_clearing() -> Scene {
    Scene::new(FOREST_CLEARING).variant(
        Variant::otherwise()
            .lines(&[
                "",
                "The path opens into a sunlit clearing.",
                "In the center stands a stone fountain, water sparkling with multicolored light.",
                "A small creature—perhaps a fairy—watches you from behind a tree.",
            ])
            .choose(
                "What do you do?",
                vec![
                    walk(
                        "approach fountain",
                        "You walk toward the beautiful fountain...",
                        MAGIC_FOUNTAIN,
                    ),
                    walk(
                        "talk to fairy",
                        "You slowly walk toward the fairy, trying not to scare it...",
                        FAIRY_ENCOUNTER,
                    ),
                ],
            ),
    )
}

fn mysterious_cave() -> Scene {
    Scene::new(MYSTERIOUS_CAVE).variant(
        Variant::otherwise()
            .lines(&[
                "",
                "The cave is darker than expected but surprisingly warm.",
                "Your eyes adjust to reveal walls covered in strange glowing symbols.",
                "A soft humming noise comes from deeper within.",
                "There's also a small opening to your left that leads outside.",
            ])
            .choose(
                "What will you do?",
                vec![
                    walk(
                        "follow sound",
                        "You decide to follow the mysterious humming sound...",
                        CRYSTAL_CHAMBER,
                    ),
                    walk(
                        "examine symbols",
                        "You move closer to study the unusual symbols...",
                        ANCIENT_LANGUAGE,
                    ),
                    walk("exit cave", "You decide to leave the cave...", FOREST_CLEARING),
                ],
            ),
    )
}

fn magic_fountain() -> Scene {
    Scene::new(MAGIC_FOUNTAIN).variant(
        Variant::otherwise()
            .lines(&[
                "",
                "The fountain's water shifts colors as you approach.",
                "An inscription on the basin reads: 'Drink and be changed.'",
            ])
            .choose(
                "Do you drink from the fountain?",
                vec![
                    ChoiceOption::new("yes", Transition::to(FAIRY_ENCOUNTER))
                        .narrate_lines(&[
                            "",
                            "You cup your hands and drink the cool, sweet water.",
                            "A tingling sensation spreads throughout your body.",
                            "You suddenly understand the language of the forest!",
                        ])
                        .give(Item::ForestTongue)
                        .pause(Beat::Long),
                    ChoiceOption::new("no", Transition::to(ANCIENT_TREE))
                        .narrate_lines(&[
                            "",
                            "You decide not to risk drinking the strange water.",
                            "As you step back, you notice a path leading to a tall tree.",
                        ])
                        .pause(Beat::Long),
                ],
            ),
    )
}

fn fairy_encounter() -> Scene {
    const ARRIVAL: &str = "The tiny fairy flutters before you, glowing with soft blue light.";

    Scene::new(FAIRY_ENCOUNTER)
        .variant(
            Variant::when_holding(Item::ForestTongue)
                .lines(&[
                    "",
                    ARRIVAL,
                    "'Greetings, human!' the fairy chimes. 'Few come to our woods these days.'",
                    "'I can guide you to the heart of the forest or to the old guardian's tree.'",
                ])
                .choose(
                    "Where would you like the fairy to guide you?",
                    vec![
                        walk(
                            "heart of forest",
                            "The fairy nods and leads you deeper into the forest...",
                            FOREST_HEART,
                        ),
                        walk(
                            "guardian's tree",
                            "The fairy grins and zips ahead toward an enormous ancient tree...",
                            ANCIENT_TREE,
                        ),
                    ],
                ),
        )
        .variant(
            Variant::otherwise()
                .lines(&[
                    "",
                    ARRIVAL,
                    "The fairy makes melodic sounds you cannot understand.",
                    "It seems to be trying to communicate something important.",
                    "After a moment, it looks disappointed and flies away.",
                    "",
                    "Perhaps there's a way to understand the fairy language...",
                ])
                .on_enter(Effect::Pause(Beat::Long))
                .fall_through(Transition::to(FOREST_CLEARING)),
        )
}

fn crystal_chamber() -> Scene {
    Scene::new(CRYSTAL_CHAMBER).variant(
        Variant::otherwise()
            .lines(&[
                "",
                "The tunnel opens into a chamber lined with glowing crystals.",
                "The humming grows louder here—it seems to come from the crystals themselves.",
                "In the center of the room is a pedestal with a crystal wand.",
            ])
            .choose(
                "What do you do?",
                vec![
                    ChoiceOption::new("take wand", Transition::to(MYSTERIOUS_CAVE))
                        .narrate_lines(&[
                            "",
                            "As your fingers close around the wand, energy courses through your arm!",
                            "You've gained a powerful magical tool.",
                        ])
                        .give(Item::CrystalWand)
                        .pause(Beat::Long)
                        .narrate_lines(&[
                            "",
                            "With the wand in hand, you decide to leave the chamber...",
                        ]),
                    ChoiceOption::new("touch crystals", Transition::to(ANCIENT_LANGUAGE))
                        .narrate_lines(&[
                            "",
                            "As your fingers brush against the crystals, visions flood your mind!",
                            "You see glimpses of the forest's past, present, and possible futures.",
                            "The experience leaves you dizzy but enlightened.",
                        ])
                        .pause(Beat::Long),
                    walk(
                        "leave chamber",
                        "You decide not to disturb anything and back out of the chamber...",
                        MYSTERIOUS_CAVE,
                    ),
                ],
            ),
    )
}

fn ancient_language() -> Scene {
    const STUDY: &str = "You study the glowing symbols carefully.";

    Scene::new(ANCIENT_LANGUAGE)
        .variant(
            Variant::when_holding(Item::CrystalWand)
                .lines(&[
                    "",
                    STUDY,
                    "With the crystal wand in your hand, the symbols reorganize themselves!",
                    "They now form words you can understand, telling an ancient story...",
                    "The story speaks of a guardian spirit that protects the forest heart.",
                ])
                .on_enter(Effect::GiveItem(Item::GuardianKnowledge))
                .on_enter(Effect::Pause(Beat::Long))
                .choose(
                    "Now that you have this knowledge, where do you go?",
                    vec![
                        walk(
                            "find guardian",
                            "Armed with new knowledge, you set out to find the forest guardian...",
                            ANCIENT_TREE,
                        ),
                        walk(
                            "return to cave entrance",
                            "You decide to head back to the cave entrance...",
                            MYSTERIOUS_CAVE,
                        ),
                    ],
                ),
        )
        .variant(
            Variant::otherwise()
                .lines(&[
                    "",
                    STUDY,
                    "The symbols seem to shift as you watch, but you cannot decipher them.",
                    "Perhaps you need something to help translate them.",
                ])
                .on_enter(Effect::Pause(Beat::Long))
                .fall_through(Transition::to(MYSTERIOUS_CAVE)),
        )
}

fn ancient_tree() -> Scene {
    const TREE: [&str; 3] = [
        "",
        "Before you stands the largest tree you've ever seen.",
        "Its trunk must be thirty feet across, bark twisted into what almost looks like a face.",
    ];

    Scene::new(ANCIENT_TREE)
        .variant(
            Variant::when_holding(Item::GuardianKnowledge)
                .lines(&TREE)
                .lines(&[
                    "",
                    "Recognizing this as the guardian from the ancient text, you approach confidently.",
                    "The bark shifts and cracks as the face becomes more defined!",
                    "'Who comes to my domain with the knowledge of old?' a deep voice rumbles.",
                ])
                .choose(
                    "How do you respond to the guardian?",
                    vec![
                        ChoiceOption::new("seek knowledge", Transition::to(FOREST_HEART))
                            .narrate_lines(&[
                                "",
                                "'I seek the wisdom of the forest,' you reply respectfully.",
                                "The guardian's wooden face creaks into what might be a smile.",
                                "'Then you shall have it. The heart of the forest welcomes you.'",
                            ])
                            .pause(Beat::Long),
                        ChoiceOption::new("need help", Transition::to(FOREST_HEART))
                            .narrate_lines(&[
                                "",
                                "'The forest is in danger, and I need your help,' you explain.",
                                "The guardian tree considers your words carefully.",
                                "'The balance must be maintained. I shall assist you.'",
                            ])
                            .give(Item::GuardianBlessing)
                            .pause(Beat::Long),
                    ],
                ),
        )
        .variant(
            Variant::otherwise()
                .lines(&TREE)
                .lines(&[
                    "",
                    "The tree stands silent and imposing, showing no signs of life or magic.",
                    "You feel there must be more to this tree, but you don't know how to proceed.",
                ])
                .on_enter(Effect::Pause(Beat::Long))
                .on_enter(Effect::narrate(""))
                .on_enter(Effect::narrate(
                    "Perhaps there are clues elsewhere in the forest...",
                ))
                .choose(
                    "Where do you go next?",
                    vec![
                        ChoiceOption::new("back to clearing", Transition::to(FOREST_CLEARING)),
                        ChoiceOption::new(
                            "explore more",
                            Transition::new()
                                .route(
                                    Route::to(FOREST_HEART)
                                        .when_holding(Item::CrystalWand)
                                        .narrate_lines(&[
                                            "",
                                            "With your crystal wand, you sense a powerful presence deeper in the forest...",
                                        ]),
                                )
                                .route(Route::to(MYSTERIOUS_CAVE).narrate_lines(&[
                                    "",
                                    "You decide to explore another part of the forest...",
                                ])),
                        ),
                    ],
                ),
        )
}

fn forest_heart() -> Scene {
    Scene::new(FOREST_HEART).variant(
        Variant::otherwise()
            .lines(&[
                "",
                "You enter a perfect circular clearing bathed in ethereal light.",
                "The very air seems to shimmer with magic, and the plants glow with inner light.",
                "In the center stands a brilliant crystalline structure pulsing with energy.",
            ])
            .fall_through(Transition::ending()),
    )
}
