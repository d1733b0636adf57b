//! Terminal frontend for The Enchanted Forest Adventure.

mod commands;
mod terminal;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ef_story::StoryConfig;

#[derive(Parser)]
#[command(
    name = "enchanted-forest",
    about = "The Enchanted Forest Adventure, a short interactive story",
    version
)]
struct Cli {
    /// Print text immediately instead of typing it out
    #[arg(long)]
    instant: bool,

    /// Delay between characters in milliseconds (default: 10)
    #[arg(long, value_name = "MS", conflicts_with = "instant")]
    delay_ms: Option<u64>,

    /// Print the scene graph as JSON and exit
    #[arg(long)]
    graph: bool,
}

impl Cli {
    fn config(&self) -> StoryConfig {
        let config = StoryConfig::default();
        match (self.instant, self.delay_ms) {
            (true, _) => config.instant(),
            (false, Some(ms)) => config.with_char_delay_ms(ms),
            (false, None) => config,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = if cli.graph {
        commands::graph::run()
    } else {
        commands::play::run(cli.config())
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
