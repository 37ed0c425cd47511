use serde::{Deserialize, Serialize};

/// Checker color. Also names whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign of the index change of a forward move: White climbs, Black descends.
    pub fn direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Cell where this color's checkers start the game.
    pub fn start_cell(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 23,
        }
    }

    /// Cell a checker of this color lands on when it enters from the bar with `distance`.
    pub fn entry_cell(&self, distance: u8) -> Option<usize> {
        if !(1..=6).contains(&distance) {
            return None;
        }
        match self {
            Color::White => Some(distance as usize - 1),
            Color::Black => Some(24 - distance as usize),
        }
    }
}
