use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use pitchdeck::config::Config;
use pitchdeck::deck::content::ecliptica_deck;
use pitchdeck::logging::init_tracing;
use pitchdeck::ui::{self, ViewerOptions};

#[derive(Debug, Parser)]
#[command(name = "pitchdeck", version, about = "Terminal pitch deck presenter")]
struct Cli {
    /// 1-based slide to open at (overrides the config file).
    #[arg(long)]
    start: Option<usize>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable mouse clicks on the progress indicator.
    #[arg(long)]
    no_mouse: bool,

    /// Append logs to this file (filtered by RUST_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let deck = ecliptica_deck().context("assemble bundled deck")?;

    let start = cli.start.unwrap_or(config.ui.start_slide);
    anyhow::ensure!(
        start >= 1 && start <= deck.len(),
        "start slide {start} is out of range 1..={}",
        deck.len()
    );

    let options = ViewerOptions {
        start: start - 1,
        tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        mouse: config.ui.mouse && !cli.no_mouse,
    };

    tracing::info!(slides = deck.len(), start, "starting viewer");
    ui::run(deck, options)?;
    Ok(())
}
