use std::{env, process};

use narde::{backgammon::Color, config::GameConfig, engine::simulate_games};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_GAMES: usize = 1000;
const DEFAULT_MAX_TURNS: usize = 200;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "simulation failed");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Usage: `narde [config.toml] [games] [max_turns]`
fn run() -> narde::Result<()> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => GameConfig::load(&path)?,
        _ => GameConfig::default(),
    };
    let games = parse_count(args.next(), DEFAULT_GAMES)?;
    let max_turns = parse_count(args.next(), DEFAULT_MAX_TURNS)?;

    let start = std::time::Instant::now();
    let report = simulate_games(&config, games, max_turns)?;
    let duration = start.elapsed();

    info!(
        games = report.games,
        turns = report.turns,
        half_moves = report.half_moves,
        forfeits = report.forfeits,
        white_hits = report.hits(Color::White),
        black_hits = report.hits(Color::Black),
        ?duration,
        "simulation finished"
    );
    if report.turns > 0 {
        info!(
            "moves per turn: {:.2}, forfeit rate: {:.2}%",
            report.half_moves as f64 / report.turns as f64,
            report.forfeits as f64 / report.turns as f64 * 100.0
        );
    }
    Ok(())
}

fn parse_count(arg: Option<String>, default: usize) -> narde::Result<usize> {
    match arg {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| narde::Error::Config(format!("expected a number, got {:?}", s))),
    }
}
