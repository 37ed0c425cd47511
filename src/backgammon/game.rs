use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use crate::{
    backgammon::{Board, CheckerId, Color, DicePair, GameEvent, HalfMove, Move, MoveValidator, Position, TurnController},
    config::GameConfig,
    error::{Error, IllegalMove, Result},
};

/// One running game: board, dice, turn and rules wired together.
///
/// This is the surface an input layer talks to. It asks [`Game::can_drag`]
/// when a drag starts and calls [`Game::drop_checker`] when it ends; a
/// rejected drop changes nothing, so the caller just snaps the checker back.
/// Notifications queue up until [`Game::drain_events`] is called.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: TurnController,
    validator: MoveValidator,
    rng: StdRng,
    events: Vec<GameEvent>,
    history: Vec<Move>,
    current: Option<Move>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Game::from_parts(
            Board::new(config.checkers_per_side),
            TurnController::new(config.first_turn),
            MoveValidator::new(config.rules.enforce_direction),
            rng,
        )
    }

    /// Starts from an arbitrary position, mostly for tests and puzzles.
    pub fn with_board(board: Board, first: Color, validator: MoveValidator, seed: u64) -> Self {
        Game::from_parts(board, TurnController::new(first), validator, StdRng::seed_from_u64(seed))
    }

    fn from_parts(board: Board, turn: TurnController, validator: MoveValidator, rng: StdRng) -> Self {
        Game {
            board,
            turn,
            validator,
            rng,
            events: Vec::new(),
            history: Vec::new(),
            current: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnController {
        &self.turn
    }

    pub fn validator(&self) -> &MoveValidator {
        &self.validator
    }

    pub fn current_turn(&self) -> Color {
        self.turn.current_turn()
    }

    pub fn can_roll(&self) -> bool {
        self.turn.can_roll()
    }

    pub fn can_move(&self) -> bool {
        self.turn.can_move()
    }

    pub fn available_moves(&self) -> Vec<u8> {
        self.turn.move_pool().snapshot()
    }

    /// Finished turns, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Rolls for the player on turn. A player left without any legal move
    /// forfeits the roll immediately.
    pub fn roll(&mut self) -> Result<DicePair> {
        let dice = self.turn.roll_for_current_turn(&mut self.rng)?;
        self.after_roll(dice);
        Ok(dice)
    }

    /// Like [`Game::roll`] with values rolled by someone else.
    pub fn roll_with(&mut self, die1: u8, die2: u8) -> Result<DicePair> {
        let dice = self.turn.apply_roll(die1, die2)?;
        self.after_roll(dice);
        Ok(dice)
    }

    fn after_roll(&mut self, dice: DicePair) {
        let color = self.turn.current_turn();
        info!(?color, %dice, "dice rolled");
        self.events.push(GameEvent::DiceRolled { color, values: dice.values() });
        self.events.push(GameEvent::BonusDice {
            active: dice.bonus().is_active(),
            value: dice.bonus().values().map(|v| v[0]),
        });
        self.current = Some(Move::new(color, dice));
        self.forfeit_if_stuck();
    }

    pub fn legal_moves(&self) -> Vec<HalfMove> {
        if !self.turn.can_move() {
            return Vec::new();
        }
        self.validator
            .generate_half_moves(&self.board, self.turn.current_turn(), self.turn.move_pool())
    }

    /// Whether `checker` may be picked up right now.
    pub fn can_drag(&self, checker: CheckerId) -> bool {
        self.check_drag(checker).is_ok()
    }

    /// Like [`Game::can_drag`] but says why not.
    pub fn check_drag(&self, checker: CheckerId) -> Result<Position> {
        let record = self.board.checker(checker).ok_or(Error::UnknownChecker(checker))?;
        let turn = self.turn.current_turn();
        if record.color() != turn {
            return Err(Error::NotYourTurn { checker, color: record.color(), turn });
        }
        if !self.turn.can_move() {
            return Err(Error::NotRolled);
        }
        match record.position() {
            Some(Position::Bar) => Ok(Position::Bar),
            Some(Position::Cell(cell)) => {
                if self.board.bar_count(turn) > 0 {
                    return Err(IllegalMove::MustEnterFromBar(turn).into());
                }
                if !self.board.is_top(checker, cell as usize) {
                    return Err(IllegalMove::NotOnTop.into());
                }
                Ok(Position::Cell(cell))
            }
            None => Err(Error::CheckerNotOnBoard(checker)),
        }
    }

    /// Drops `checker` on cell `to`: validates, moves, then spends the die.
    /// On error nothing has changed.
    pub fn drop_checker(&mut self, checker: CheckerId, to: usize) -> Result<HalfMove> {
        let from = match self.check_drag(checker) {
            Ok(from) => from,
            Err(err) => {
                warn!(%checker, to, error = %err, "drag rejected");
                return Err(err);
            }
        };
        let pool = self.turn.move_pool();
        let checked = match from {
            Position::Bar => self.validator.validate_entry(&self.board, checker, to, pool),
            Position::Cell(cell) => self.validator.validate(&self.board, checker, cell as usize, to, pool),
        };
        let distance = match checked {
            Ok(distance) => distance,
            Err(reason) => {
                warn!(%checker, ?from, to, %reason, "illegal drop");
                return Err(reason.into());
            }
        };

        let hit = match from {
            Position::Bar => self.board.enter_checker(checker, to)?,
            Position::Cell(cell) => self.board.move_checker(checker, cell as usize, to)?,
        };
        let half_move = HalfMove::new(checker, from, to, distance);
        self.events.push(GameEvent::CheckerMoved { checker, from, to });
        if let Some(victim) = hit {
            debug!(%victim, cell = to, "checker hit");
            self.events.push(GameEvent::CheckerHit { checker: victim, cell: to });
        }
        if let Some(current) = self.current.as_mut() {
            current.add_half_move(half_move);
        }

        if self.turn.consume_move(distance)? {
            self.finish_turn();
        } else {
            self.forfeit_if_stuck();
        }
        Ok(half_move)
    }

    fn forfeit_if_stuck(&mut self) {
        if !self.turn.can_move() || !self.legal_moves().is_empty() {
            return;
        }
        let color = self.turn.current_turn();
        let unused = self.turn.move_pool().len();
        if self.turn.forfeit() {
            info!(?color, unused, "no legal move, turn forfeited");
            self.events.push(GameEvent::TurnForfeited { color, unused });
            if let Some(current) = self.current.as_mut() {
                current.mark_forfeited();
            }
            self.finish_turn();
        }
    }

    fn finish_turn(&mut self) {
        if let Some(done) = self.current.take() {
            debug!(turn = ?done, "turn finished");
            self.history.push(done);
        }
        self.events.push(GameEvent::TurnSwitched { color: self.turn.current_turn() });
    }
}
