use hashbrown::HashMap;
use rand::{Rng, SeedableRng, random, rngs::StdRng, seq::IteratorRandom};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info};

use crate::{
    backgammon::{Color, Game, GameEvent, HalfMove},
    config::GameConfig,
    error::{Error, Result},
};

/// Mixed into the game seed so move choice and dice use different streams.
const MOVE_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// What happened in one self-played game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub turns: usize,
    pub half_moves: usize,
    pub forfeits: usize,
    pub hits: HashMap<Color, usize>,
}

/// Totals over many self-played games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub games: usize,
    pub turns: usize,
    pub half_moves: usize,
    pub forfeits: usize,
    pub hits: HashMap<Color, usize>,
}

impl SimulationReport {
    fn add(mut self, game: GameSummary) -> Self {
        self.games += 1;
        self.turns += game.turns;
        self.half_moves += game.half_moves;
        self.forfeits += game.forfeits;
        for (color, n) in game.hits {
            *self.hits.entry(color).or_default() += n;
        }
        self
    }

    pub fn hits(&self, color: Color) -> usize {
        self.hits.get(&color).copied().unwrap_or(0)
    }
}

pub fn choose_random_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<HalfMove> {
    game.legal_moves().into_iter().choose(rng)
}

/// Plays `max_turns` turns with random legal moves for both sides, checking
/// the board invariants after every move.
pub fn play_random_game(config: &GameConfig, seed: u64, max_turns: usize) -> Result<GameSummary> {
    let config = GameConfig { seed: Some(seed), ..config.clone() };
    let mut game = Game::new(&config);
    let mut rng = StdRng::seed_from_u64(seed ^ MOVE_STREAM);
    let mut summary = GameSummary::default();

    while game.history().len() < max_turns {
        if game.can_roll() {
            game.roll()?;
        }
        while game.can_move() {
            let half_move = choose_random_move(&game, &mut rng).ok_or_else(|| {
                Error::BrokenInvariant(format!("{:?} has dice left but no legal move", game.current_turn()))
            })?;
            game.drop_checker(half_move.checker(), half_move.to())?;
            game.board().check_invariants()?;
            summary.half_moves += 1;
        }
        for event in game.drain_events() {
            match event {
                GameEvent::CheckerHit { checker, .. } => {
                    if let Some(victim) = game.board().checker(checker) {
                        *summary.hits.entry(victim.color().opposite()).or_default() += 1;
                    }
                }
                GameEvent::TurnForfeited { .. } => summary.forfeits += 1,
                _ => {}
            }
        }
    }
    summary.turns = game.history().len();
    debug!(seed, ?summary, "game finished\n{}", game.board().to_fancy_string());
    Ok(summary)
}

/// Plays `games` independent random games in parallel. Seeds are consecutive,
/// starting at the config seed (or a random one).
pub fn simulate_games(config: &GameConfig, games: usize, max_turns: usize) -> Result<SimulationReport> {
    let base_seed = config.seed.unwrap_or_else(random);
    info!(games, max_turns, base_seed, "simulation started");
    let summaries = (0..games)
        .into_par_iter()
        .map(|i| play_random_game(config, base_seed.wrapping_add(i as u64), max_turns))
        .collect::<Result<Vec<_>>>()?;
    Ok(summaries.into_iter().fold(SimulationReport::default(), SimulationReport::add))
}
