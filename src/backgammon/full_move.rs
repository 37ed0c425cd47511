use std::{
    fmt::{self, Debug},
    ops::Deref,
};

use crate::backgammon::{Color, DicePair, HalfMove};

/// Everything one player did with one roll.
#[derive(Clone, PartialEq, Eq)]
pub struct Move {
    color: Color,
    dice: DicePair,
    half_moves: Vec<HalfMove>,
    forfeited: bool,
}

impl Move {
    pub fn new(color: Color, dice: DicePair) -> Self {
        Move { color, dice, half_moves: Vec::with_capacity(4), forfeited: false }
    }

    pub fn add_half_move(&mut self, half_move: HalfMove) {
        self.half_moves.push(half_move);
    }

    pub(crate) fn mark_forfeited(&mut self) {
        self.forfeited = true;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn dice(&self) -> DicePair {
        self.dice
    }

    /// True when some dice went unused because no legal move was left.
    pub fn forfeited(&self) -> bool {
        self.forfeited
    }
}

impl Deref for Move {
    type Target = [HalfMove];

    fn deref(&self) -> &Self::Target {
        &self.half_moves
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}: ", self.color, self.dice)?;
        for (i, half_move) in self.half_moves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", half_move)?;
        }
        if self.forfeited {
            write!(f, " (forfeited)")?;
        }
        Ok(())
    }
}
