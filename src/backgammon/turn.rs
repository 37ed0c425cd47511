use rand::Rng;
use tracing::{debug, info};

use crate::{
    backgammon::{Color, DicePair, MovePool},
    error::{Error, Result},
};

/// Tracks whose turn it is and gates rolling and moving.
///
/// Per turn: awaiting roll -> roll -> moves available -> consume until the
/// pool is empty -> awaiting roll for the other color.
#[derive(Debug, Clone)]
pub struct TurnController {
    current: Color,
    can_roll: bool,
    dice: DicePair,
    pool: MovePool,
}

impl TurnController {
    pub fn new(first: Color) -> Self {
        TurnController {
            current: first,
            can_roll: true,
            dice: DicePair::new(),
            pool: MovePool::new(),
        }
    }

    pub fn current_turn(&self) -> Color {
        self.current
    }

    /// True while the current player has not rolled yet.
    pub fn can_roll(&self) -> bool {
        self.can_roll
    }

    /// True after rolling and before every distance has been used.
    pub fn can_move(&self) -> bool {
        !self.can_roll && !self.pool.is_empty()
    }

    pub fn dice(&self) -> &DicePair {
        &self.dice
    }

    pub fn move_pool(&self) -> &MovePool {
        &self.pool
    }

    pub fn roll_for_current_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DicePair> {
        if !self.can_roll {
            return Err(Error::RollNotAllowed);
        }
        self.dice.roll(rng);
        self.start_moves();
        Ok(self.dice)
    }

    /// Same as [`Self::roll_for_current_turn`] with dice rolled elsewhere.
    pub fn apply_roll(&mut self, die1: u8, die2: u8) -> Result<DicePair> {
        if !self.can_roll {
            return Err(Error::RollNotAllowed);
        }
        self.dice.set(die1, die2)?;
        self.start_moves();
        Ok(self.dice)
    }

    fn start_moves(&mut self) {
        self.pool.rebuild(&self.dice);
        self.can_roll = false;
        debug!(turn = ?self.current, dice = %self.dice, moves = %self.pool, "moves available");
    }

    /// Uses one `distance` from the pool. Returns true when that emptied the
    /// pool and the turn passed to the other color.
    pub fn consume_move(&mut self, distance: u8) -> Result<bool> {
        if self.pool.use_distance(distance)? {
            self.end_turn();
            return Ok(true);
        }
        Ok(false)
    }

    /// Gives up the remaining distances when none of them can be played.
    /// Returns false if there was nothing to give up.
    pub fn forfeit(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        debug!(turn = ?self.current, unused = %self.pool, "moves forfeited");
        self.pool.clear();
        self.end_turn();
        true
    }

    fn end_turn(&mut self) {
        self.current = self.current.opposite();
        self.can_roll = true;
        self.dice = DicePair::new();
        self.pool.clear();
        info!(turn = ?self.current, "turn switched");
    }
}

impl Default for TurnController {
    fn default() -> Self {
        TurnController::new(Color::White)
    }
}
