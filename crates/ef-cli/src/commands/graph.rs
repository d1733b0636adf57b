use ef_story::StoryEngine;

pub fn run() -> Result<(), String> {
    let engine = StoryEngine::forest().map_err(|e| format!("invalid story: {e}"))?;
    let json = serde_json::to_string_pretty(engine.graph()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
