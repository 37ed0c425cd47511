use std::fmt::{self, Display};

use tracing::debug;

use crate::{
    backgammon::DicePair,
    error::{Error, Result},
    misc::TinyVec,
};

/// The unused move distances of the current roll: two entries, or four on doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovePool {
    moves: TinyVec<u8, 4>,
}

impl MovePool {
    pub fn new() -> Self {
        MovePool { moves: TinyVec::new() }
    }

    /// Replaces the whole pool with the distances granted by `dice`.
    pub fn rebuild(&mut self, dice: &DicePair) {
        let mut moves = TinyVec::new();
        let main = dice.values();
        let bonus = dice.bonus().values().unwrap_or_default();
        let granted = if dice.bonus().is_active() { 4 } else { 2 };
        for &d in main.iter().chain(bonus.iter()).take(granted) {
            // four slots always fit the main pair plus the bonus pair
            let _ = moves.push(d);
        }
        self.moves = moves;
        debug!(moves = %self, "move pool rebuilt");
    }

    pub fn contains(&self, distance: u8) -> bool {
        self.moves.contains(&distance)
    }

    /// Removes one occurrence of `distance`. Returns whether the pool is now empty.
    pub fn use_distance(&mut self, distance: u8) -> Result<bool> {
        let index = self
            .moves
            .iter()
            .position(|&d| d == distance)
            .ok_or(Error::InvalidMoveDistance(distance))?;
        self.moves.remove(index);
        debug!(distance, remaining = %self, "move distance used");
        Ok(self.moves.is_empty())
    }

    pub fn snapshot(&self) -> Vec<u8> {
        self.moves.to_vec()
    }

    /// Each available distance once, in pool order.
    pub fn distinct(&self) -> TinyVec<u8, 4> {
        let mut out = TinyVec::new();
        for &d in self.moves.iter() {
            if !out.contains(&d) {
                let _ = out.push(d);
            }
        }
        out
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Display for MovePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}
