//! Bowling runner (default binary).
//!
//! Seats the named players on a lane, bowls a full game with seeded random pin
//! counts and prints the scoreboard. All game rules live in the core crate;
//! this file only wires configuration, pacing and output together.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use log::{info, LevelFilter};

use bowling_arena::core::{BowlingConfig, GameSession, LaneArena, SeededRolls};
use bowling_arena::term::print_scoreboard;

#[derive(Parser, Debug)]
#[command(name = "bowling")]
#[command(about = "Bowl a ten-frame game for one or more players")]
#[command(long_about = "Bowl a ten-frame game for one or more players.

Strikes score their pins plus 10 and spares their pins plus 5, credited when
the frame completes. Settings are read from BOWLING_* environment variables;
command-line flags take priority.")]
struct Args {
    /// Player names, in seat order
    #[arg(required = true)]
    players: Vec<String>,

    /// Lanes in the arena [env: BOWLING_LANES]
    #[arg(long)]
    lanes: Option<usize>,

    /// Seed for pin counts [env: BOWLING_SEED]
    #[arg(long)]
    seed: Option<u32>,

    /// Delay between frames in milliseconds [env: BOWLING_PACE_MS]
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Print the scoreboard after every frame
    #[arg(long)]
    live: bool,

    /// Print the final scoreboard as JSON
    #[arg(long)]
    json: bool,

    /// Disable coloured output [env: BOWLING_DISABLE_COLOR]
    #[arg(long)]
    no_color: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = resolve_config(&args);
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("arena with {} lane(s), seed {}", config.lanes, seed);

    let arena = Arc::new(LaneArena::from_config(&config));
    let mut session =
        GameSession::create(args.players.iter().cloned(), &arena).context("starting game")?;
    let mut rolls = SeededRolls::new(seed);

    let pace = Duration::from_millis(config.pace_ms);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while !session.is_finished() {
        let frame = session
            .play_frame(&mut rolls)
            .with_context(|| format!("bowling frame {}", session.frame_number()))?;

        if args.live && !session.is_finished() {
            writeln!(out, "--- after frame {} ---", frame)?;
            print_scoreboard(&mut out, &session.scoreboard(), config.color)?;
        }
        if !pace.is_zero() {
            thread::sleep(pace);
        }
    }

    let board = session.scoreboard();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &board).context("encoding scoreboard")?;
        writeln!(out)?;
    } else {
        print_scoreboard(&mut out, &board, config.color)?;
    }
    Ok(())
}

/// Environment first, then command-line overrides.
fn resolve_config(args: &Args) -> BowlingConfig {
    let mut config = BowlingConfig::from_env();
    if let Some(lanes) = args.lanes {
        config.lanes = lanes;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(pace_ms) = args.pace_ms {
        config.pace_ms = pace_ms;
    }
    if args.no_color || !io::stdout().is_tty() {
        config.color = false;
    }
    config
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
