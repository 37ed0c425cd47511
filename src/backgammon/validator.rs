use crate::{
    backgammon::{Board, CELL_COUNT, CheckerId, Color, HalfMove, MovePool, Position},
    error::IllegalMove,
};

/// Decides whether a checker may travel between two cells with the dice left
/// in the pool. It never mutates anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveValidator {
    enforce_direction: bool,
}

impl MoveValidator {
    pub fn new(enforce_direction: bool) -> Self {
        MoveValidator { enforce_direction }
    }

    pub fn enforces_direction(&self) -> bool {
        self.enforce_direction
    }

    pub fn is_legal(&self, board: &Board, checker: CheckerId, from: usize, to: usize, pool: &MovePool) -> bool {
        self.validate(board, checker, from, to, pool).is_ok()
    }

    /// Checks a move along the track and returns the die distance it uses.
    pub fn validate(
        &self,
        board: &Board,
        checker: CheckerId,
        from: usize,
        to: usize,
        pool: &MovePool,
    ) -> Result<u8, IllegalMove> {
        for cell in [from, to] {
            if cell >= CELL_COUNT {
                return Err(IllegalMove::OffBoard(cell));
            }
        }
        let expected = Position::Cell(from as u8);
        let record = board
            .checker(checker)
            .ok_or(IllegalMove::WrongSource { expected, actual: None })?;
        if record.position() != Some(expected) {
            return Err(IllegalMove::WrongSource { expected, actual: record.position() });
        }
        let color = record.color();
        if board.bar_count(color) > 0 {
            return Err(IllegalMove::MustEnterFromBar(color));
        }

        let step = to as i32 - from as i32;
        let forward = step.signum() == color.direction() as i32;
        if step == 0 || (self.enforce_direction && !forward) {
            return Err(IllegalMove::WrongDirection { color, from, to });
        }
        let distance = step.unsigned_abs() as u8;
        if !pool.contains(distance) {
            return Err(IllegalMove::DistanceUnavailable(distance));
        }
        if !board.can_place(to, color) {
            return Err(IllegalMove::Blocked(to));
        }
        if !board.is_top(checker, from) {
            return Err(IllegalMove::NotOnTop);
        }
        Ok(distance)
    }

    /// Checks bringing a hit checker back from the bar onto `to` and returns
    /// the die distance it uses.
    pub fn validate_entry(
        &self,
        board: &Board,
        checker: CheckerId,
        to: usize,
        pool: &MovePool,
    ) -> Result<u8, IllegalMove> {
        if to >= CELL_COUNT {
            return Err(IllegalMove::OffBoard(to));
        }
        let record = board
            .checker(checker)
            .ok_or(IllegalMove::WrongSource { expected: Position::Bar, actual: None })?;
        if !record.is_on_bar() {
            return Err(IllegalMove::WrongSource { expected: Position::Bar, actual: record.position() });
        }
        let color = record.color();
        let distance = match color {
            Color::White => to + 1,
            Color::Black => CELL_COUNT - to,
        };
        if distance > 6 {
            return Err(IllegalMove::WrongDirection { color, from: color.start_cell(), to });
        }
        let distance = distance as u8;
        if !pool.contains(distance) {
            return Err(IllegalMove::DistanceUnavailable(distance));
        }
        if !board.can_place(to, color) {
            return Err(IllegalMove::Blocked(to));
        }
        Ok(distance)
    }

    /// Every single-die move `color` could make right now. Only one checker per
    /// stack (the top one) and one bar checker are considered, since the others
    /// are interchangeable or buried.
    pub fn generate_half_moves(&self, board: &Board, color: Color, pool: &MovePool) -> Vec<HalfMove> {
        let mut half_moves = Vec::new();
        let distances = pool.distinct();

        if let Some(waiting) = board.bar(color).next() {
            for &d in distances.iter() {
                let Some(to) = color.entry_cell(d) else { continue };
                if let Ok(distance) = self.validate_entry(board, waiting, to, pool) {
                    half_moves.push(HalfMove::new(waiting, Position::Bar, to, distance));
                }
            }
            return half_moves;
        }

        for from in 0..CELL_COUNT {
            if board.occupancy_color(from) != Some(color) {
                continue;
            }
            let Some(top) = board.top_checker(from) else { continue };
            for &d in distances.iter() {
                let forward = from as i32 + color.direction() as i32 * d as i32;
                let backward = from as i32 - color.direction() as i32 * d as i32;
                let targets = if self.enforce_direction { [Some(forward), None] } else { [Some(forward), Some(backward)] };
                for to in targets.into_iter().flatten() {
                    if !(0..CELL_COUNT as i32).contains(&to) {
                        continue;
                    }
                    if let Ok(distance) = self.validate(board, top, from, to as usize, pool) {
                        half_moves.push(HalfMove::new(top, Position::Cell(from as u8), to as usize, distance));
                    }
                }
            }
        }
        half_moves
    }
}

impl Default for MoveValidator {
    fn default() -> Self {
        MoveValidator::new(true)
    }
}
