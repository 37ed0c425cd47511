use std::fmt::{self, Display};

use crate::backgammon::{Color, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CheckerId(pub u8);

impl Display for CheckerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single game piece. The color is fixed at creation, the position is
/// `None` until the board first places it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checker {
    id: CheckerId,
    color: Color,
    position: Option<Position>,
}

impl Checker {
    pub fn new(id: CheckerId, color: Color) -> Self {
        Checker { id, color, position: None }
    }

    pub fn id(&self) -> CheckerId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn cell_index(&self) -> Option<usize> {
        self.position.and_then(|p| p.cell_index())
    }

    pub fn is_on_bar(&self) -> bool {
        self.position == Some(Position::Bar)
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }
}
