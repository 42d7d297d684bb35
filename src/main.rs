use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::{Grid, Match};
use connect_four::prompt::Prompter;
use connect_four::render::{Renderer, SnapshotFormat, SnapshotWriter, TerminalRenderer};
use connect_four::setup::{build_player, run_setup, SetupOptions};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Board width; skips the column prompt
    #[arg(long)]
    columns: Option<usize>,

    /// Board height; skips the row prompt
    #[arg(long)]
    rows: Option<usize>,

    /// Seed for machine players
    #[arg(long)]
    seed: Option<u64>,

    /// Rewrite this file with the board after every move
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Snapshot layout: legacy or json
    #[arg(long)]
    snapshot_format: Option<SnapshotFormat>,

    /// Print the board without colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(seed) = cli.seed {
        config.players.seed = Some(seed);
    }
    if let Some(path) = cli.snapshot {
        config.snapshot.path = Some(path);
    }
    if let Some(format) = cli.snapshot_format {
        config.snapshot.format = format;
    }
    config.validate().context("invalid settings")?;

    let mut options = SetupOptions::from_config(&config);
    options.columns = cli.columns;
    options.rows = cli.rows;

    let setup = {
        let mut prompter = Prompter::stdio();
        run_setup(&mut prompter, &options).context("reading match setup")?
    };

    let seed = config.players.seed;
    let [first, second] = &setup.players;
    let mut first = build_player(first, seed);
    let mut second = build_player(second, seed.map(|s| s.wrapping_add(1)));

    let grid = Grid::new(setup.columns, setup.rows)?;
    let mut game = Match::new(grid, [first.as_mut(), second.as_mut()])?;

    let mut terminal = TerminalRenderer::stdout(!cli.no_color);
    let mut snapshot = config
        .snapshot
        .path
        .as_ref()
        .map(|path| SnapshotWriter::new(path, config.snapshot.format));

    let mut renderers: Vec<&mut dyn Renderer> = vec![&mut terminal];
    if let Some(writer) = snapshot.as_mut() {
        renderers.push(writer);
    }

    game.play(&mut renderers)?;
    Ok(())
}
