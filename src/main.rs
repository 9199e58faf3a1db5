use anyhow::Context;
use clap::{ArgAction, Parser};
use minesweeper_tty::config::{DEFAULT_COLS, DEFAULT_MINE_PERCENTAGE, DEFAULT_ROWS};
use minesweeper_tty::{session, Game, GameConfig, RawMode, Renderer};
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "minesweeper", about = "Minesweeper in the terminal", version)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Percentage of cells holding a mine (0-50)
    #[arg(long = "mines-percent", default_value_t = DEFAULT_MINE_PERCENTAGE)]
    mines_percent: u32,
    /// Seed for mine placement (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GameConfig::new(args.rows, args.cols, args.mines_percent)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::debug!(?config, seed, "starting game");
    let mut game = Game::new(config, seed)?;

    let raw_mode = RawMode::acquire().context("failed to put the terminal into raw mode")?;
    let mut renderer = Renderer::new(io::stdout().lock());
    let end = session::run(
        &mut game,
        io::stdin().lock(),
        &mut renderer,
        raw_mode.is_enabled(),
    )
    .context("terminal I/O failed")?;
    tracing::info!(?end, "session over");

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
