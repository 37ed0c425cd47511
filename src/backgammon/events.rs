use crate::backgammon::{CheckerId, Color, Position};

/// Notifications for the presentation layer, drained with
/// [`crate::backgammon::Game::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    DiceRolled { color: Color, values: [u8; 2] },
    BonusDice { active: bool, value: Option<u8> },
    CheckerMoved { checker: CheckerId, from: Position, to: usize },
    CheckerHit { checker: CheckerId, cell: usize },
    TurnForfeited { color: Color, unused: usize },
    TurnSwitched { color: Color },
}
