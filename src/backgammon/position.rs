use std::fmt::{self, Debug, Display};

pub const CELL_COUNT: usize = 24;

/// Where a placed checker sits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Bar,
    Cell(u8),
}

impl Position {
    pub fn cell_index(&self) -> Option<usize> {
        match self {
            Position::Cell(i) => Some(*i as usize),
            Position::Bar => None,
        }
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Bar => write!(f, "Bar"),
            Position::Cell(i) => write!(f, "Cell({})", i),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Bar => write!(f, "bar"),
            Position::Cell(i) => write!(f, "{}", i),
        }
    }
}
