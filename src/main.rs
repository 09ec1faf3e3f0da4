use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use narrative::constants::DEFAULT_SCRIPT;
use narrative::headless::run_script;
use narrative::input::parse_script;
use narrative::{Deck, NavigatorConfig, SlideNavigator};

#[derive(Debug, Parser)]
#[command(name = "narrative", about = "Present a deck of slides one step at a time")]
struct Cli {
    /// Directory holding the slides (images and/or a deck.toml manifest)
    deck: PathBuf,

    /// Transition lock in milliseconds; 0 disables it [default: manifest value or 600]
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Run a command script without opening a window
    #[arg(long)]
    headless: bool,

    /// Commands for the headless run: next, prev, replay, goto:N, wait:MS
    #[arg(long, default_value = DEFAULT_SCRIPT)]
    script: String,

    /// Log navigation details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "narrative=debug" } else { "narrative=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Load Slides ---
    let deck = Deck::load(&cli.deck)
        .with_context(|| format!("Error loading slides from '{}'", cli.deck.display()))?;
    let config = deck.navigator_config(cli.debounce_ms);

    if cli.headless || !cfg!(feature = "gui") {
        return run_headless(deck, config, &cli.script);
    }

    #[cfg(feature = "gui")]
    narrative::gui::run(deck, config)?;

    Ok(())
}

/// Replays `script` against the deck and prints every rendered frame.
fn run_headless(deck: Deck, config: NavigatorConfig, script: &str) -> Result<()> {
    let steps = parse_script(script).context("Invalid command script")?;

    let mut navigator = SlideNavigator::new(deck.into_slides(), config, ())?;
    run_script(&mut navigator, &steps, &mut io::stdout().lock())
        .context("Failed to write session output")?;

    Ok(())
}
