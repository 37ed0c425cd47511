use std::fmt::{self, Debug, Display};

use crate::backgammon::{CheckerId, Position};

/// One checker moved with one die.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfMove {
    checker: CheckerId,
    from: Position,
    to: u8,
    distance: u8,
}

impl HalfMove {
    pub fn new(checker: CheckerId, from: Position, to: usize, distance: u8) -> Self {
        HalfMove { checker, from, to: to as u8, distance }
    }

    pub fn checker(&self) -> CheckerId {
        self.checker
    }

    pub fn from(&self) -> Position {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to as usize
    }

    pub fn distance(&self) -> u8 {
        self.distance
    }

    pub fn is_entry(&self) -> bool {
        self.from == Position::Bar
    }
}

impl Debug for HalfMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} -> {} ({})", self.checker, self.from, self.to, self.distance)
    }
}

impl Display for HalfMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
