use thiserror::Error;

use crate::backgammon::{CheckerId, Color, Position};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cell index {0} is outside 0..24")]
    InvalidCellIndex(usize),
    #[error("checker {checker} is not in cell {cell}")]
    CheckerNotInCell { checker: CheckerId, cell: usize },
    #[error("checker {0} does not exist")]
    UnknownChecker(CheckerId),
    #[error("checker {0} has not been placed")]
    CheckerNotOnBoard(CheckerId),
    #[error("{color:?} already has {limit} checkers")]
    TooManyCheckers { color: Color, limit: u8 },
    #[error("cell {cell} is held by two or more {owner:?} checkers")]
    CellBlocked { cell: usize, owner: Color },
    #[error("move distance {0} is not available")]
    InvalidMoveDistance(u8),
    #[error("die value {0} is outside 1..=6")]
    InvalidDieValue(u8),
    #[error("dice cannot be rolled while moves remain")]
    RollNotAllowed,
    #[error("dice have not been rolled this turn")]
    NotRolled,
    #[error("it is {turn:?}'s turn, checker {checker} is {color:?}")]
    NotYourTurn {
        checker: CheckerId,
        color: Color,
        turn: Color,
    },
    #[error("board invariant broken: {0}")]
    BrokenInvariant(String),
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("invalid config: {0}")]
    Config(String),
    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reason a validator rejected a move. Rejection is an ordinary outcome,
/// the board is never touched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("cell index {0} is outside 0..24")]
    OffBoard(usize),
    #[error("checker is at {actual:?}, not {expected:?}")]
    WrongSource {
        expected: Position,
        actual: Option<Position>,
    },
    #[error("{color:?} cannot move from {from} to {to}")]
    WrongDirection { color: Color, from: usize, to: usize },
    #[error("no die shows {0}")]
    DistanceUnavailable(u8),
    #[error("cell {0} is blocked")]
    Blocked(usize),
    #[error("checker is buried under another checker")]
    NotOnTop,
    #[error("{0:?} has checkers on the bar that must enter first")]
    MustEnterFromBar(Color),
}
