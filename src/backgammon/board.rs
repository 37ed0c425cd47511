use std::array;

use hashbrown::HashMap;
use tracing::debug;

use crate::{
    backgammon::{CELL_COUNT, Checker, CheckerId, Color, Position},
    error::{Error, IllegalMove, Result},
};

/// The 24 cells of the track plus the bar.
///
/// Every cell is a stack of checker ids in arrival order: the last id is the
/// top checker and the only one allowed to move. A non-empty cell only ever
/// holds one color. Checkers that get hit wait on the bar until they re-enter.
/// The board owns the [`Checker`] records, so a checker's recorded position
/// always agrees with the stack it sits in.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Vec<CheckerId>; CELL_COUNT],
    bar: Vec<CheckerId>,
    checkers: HashMap<CheckerId, Checker>,
    next_id: u8,
}

impl Board {
    pub const MAX_CHECKERS_PER_SIDE: u8 = 15;

    /// Creates the starting position: all White checkers on cell 0, all Black
    /// checkers on cell 23. `checkers_per_side` is capped at
    /// [`Self::MAX_CHECKERS_PER_SIDE`]; use [`crate::config::GameConfig::validate`]
    /// to reject larger values instead.
    pub fn new(checkers_per_side: u8) -> Self {
        let mut board = Board::empty();
        let per_side = checkers_per_side.min(Self::MAX_CHECKERS_PER_SIDE);
        for color in Color::BOTH {
            for _ in 0..per_side {
                board.push_new(color, color.start_cell());
            }
        }
        debug!(per_side, "board set up");
        board
    }

    /// Creates a board with no checkers on it.
    pub fn empty() -> Self {
        Board {
            cells: array::from_fn(|_| Vec::new()),
            bar: Vec::new(),
            checkers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Creates a new checker of `color` on top of `cell`. Fails once `color`
    /// already has [`Self::MAX_CHECKERS_PER_SIDE`] checkers.
    pub fn place(&mut self, color: Color, cell: usize) -> Result<CheckerId> {
        Self::check_index(cell)?;
        if self.checkers_of(color).count() >= Self::MAX_CHECKERS_PER_SIDE as usize {
            return Err(Error::TooManyCheckers { color, limit: Self::MAX_CHECKERS_PER_SIDE });
        }
        if let Some(owner) = self.occupancy_color(cell) {
            if owner != color {
                return Err(Error::CellBlocked { cell, owner });
            }
        }
        Ok(self.push_new(color, cell))
    }

    fn push_new(&mut self, color: Color, cell: usize) -> CheckerId {
        let id = CheckerId(self.next_id);
        self.next_id += 1;
        let mut checker = Checker::new(id, color);
        checker.set_position(Position::Cell(cell as u8));
        self.checkers.insert(id, checker);
        self.cells[cell].push(id);
        id
    }

    fn check_index(cell: usize) -> Result<()> {
        if cell < CELL_COUNT {
            Ok(())
        } else {
            Err(Error::InvalidCellIndex(cell))
        }
    }

    pub fn checker(&self, id: CheckerId) -> Option<&Checker> {
        self.checkers.get(&id)
    }

    pub fn checkers(&self) -> impl Iterator<Item = &Checker> {
        self.checkers.values()
    }

    pub fn checkers_of(&self, color: Color) -> impl Iterator<Item = &Checker> {
        self.checkers.values().filter(move |c| c.color() == color)
    }

    pub fn total_checkers(&self) -> usize {
        self.checkers.len()
    }

    /// The stack on `cell`, bottom first.
    pub fn cell(&self, cell: usize) -> Option<&[CheckerId]> {
        self.cells.get(cell).map(Vec::as_slice)
    }

    pub fn count(&self, cell: usize) -> usize {
        self.cells.get(cell).map_or(0, Vec::len)
    }

    pub fn top_checker(&self, cell: usize) -> Option<CheckerId> {
        self.cells.get(cell)?.last().copied()
    }

    pub fn is_top(&self, checker: CheckerId, cell: usize) -> bool {
        self.top_checker(cell) == Some(checker)
    }

    pub fn occupancy_color(&self, cell: usize) -> Option<Color> {
        let bottom = self.cells.get(cell)?.first()?;
        self.checkers.get(bottom).map(Checker::color)
    }

    /// Whether a `color` checker may land on `cell`: the cell is empty, already
    /// `color`, or holds a single opposing checker that would be hit.
    pub fn can_place(&self, cell: usize, color: Color) -> bool {
        match self.occupancy_color(cell) {
            None => cell < CELL_COUNT,
            Some(owner) if owner == color => true,
            Some(_) => self.count(cell) == 1,
        }
    }

    /// Checkers of `color` waiting on the bar, in the order they were hit.
    pub fn bar(&self, color: Color) -> impl Iterator<Item = CheckerId> + '_ {
        self.bar
            .iter()
            .copied()
            .filter(move |id| self.checkers.get(id).is_some_and(|c| c.color() == color))
    }

    pub fn bar_count(&self, color: Color) -> usize {
        self.bar(color).count()
    }

    /// Moves `checker` from `from` onto the top of `to`. Distance, direction
    /// and turn are not checked here; that is the validator's job.
    ///
    /// Landing on a lone opposing checker hits it onto the bar; the hit
    /// checker's id is returned.
    pub fn move_checker(&mut self, checker: CheckerId, from: usize, to: usize) -> Result<Option<CheckerId>> {
        Self::check_index(from)?;
        Self::check_index(to)?;
        let color = self.checker(checker).ok_or(Error::UnknownChecker(checker))?.color();
        let slot = self.cells[from]
            .iter()
            .position(|&id| id == checker)
            .ok_or(Error::CheckerNotInCell { checker, cell: from })?;
        self.check_landing(to, color)?;

        self.cells[from].remove(slot);
        let hit = self.land(checker, color, to);
        debug!(%checker, ?color, from, to, hit = ?hit, "checker moved");
        Ok(hit)
    }

    /// Brings a checker from the bar back onto `to`.
    pub fn enter_checker(&mut self, checker: CheckerId, to: usize) -> Result<Option<CheckerId>> {
        Self::check_index(to)?;
        let color = self.checker(checker).ok_or(Error::UnknownChecker(checker))?.color();
        let slot = self
            .bar
            .iter()
            .position(|&id| id == checker)
            .ok_or(Error::IllegalMove(IllegalMove::WrongSource {
                expected: Position::Bar,
                actual: self.checker(checker).and_then(Checker::position),
            }))?;
        self.check_landing(to, color)?;

        self.bar.remove(slot);
        let hit = self.land(checker, color, to);
        debug!(%checker, ?color, to, hit = ?hit, "checker entered from bar");
        Ok(hit)
    }

    fn check_landing(&self, to: usize, color: Color) -> Result<()> {
        if self.can_place(to, color) {
            Ok(())
        } else {
            let owner = color.opposite();
            Err(Error::CellBlocked { cell: to, owner })
        }
    }

    // Callers have already checked `can_place(to, color)`.
    fn land(&mut self, checker: CheckerId, color: Color, to: usize) -> Option<CheckerId> {
        let mut hit = None;
        if self.occupancy_color(to).is_some_and(|owner| owner != color) {
            if let Some(victim) = self.cells[to].pop() {
                self.bar.push(victim);
                if let Some(c) = self.checkers.get_mut(&victim) {
                    c.set_position(Position::Bar);
                }
                hit = Some(victim);
            }
        }
        self.cells[to].push(checker);
        if let Some(c) = self.checkers.get_mut(&checker) {
            c.set_position(Position::Cell(to as u8));
        }
        hit
    }

    /// Verifies that every checker sits in exactly one place, that the place
    /// agrees with its recorded position and that no cell mixes colors.
    pub fn check_invariants(&self) -> Result<()> {
        let broken = |msg: String| Err(Error::BrokenInvariant(msg));
        let mut seen = 0usize;
        for (i, stack) in self.cells.iter().enumerate() {
            let mut colors = stack.iter().filter_map(|id| self.checkers.get(id)).map(Checker::color);
            if let Some(first) = colors.next() {
                if colors.any(|c| c != first) {
                    return broken(format!("cell {} mixes colors", i));
                }
            }
            for id in stack {
                match self.checkers.get(id).and_then(Checker::position) {
                    Some(Position::Cell(c)) if c as usize == i => seen += 1,
                    other => return broken(format!("checker {} in cell {} records {:?}", id, i, other)),
                }
            }
        }
        for id in &self.bar {
            match self.checkers.get(id).and_then(Checker::position) {
                Some(Position::Bar) => seen += 1,
                other => return broken(format!("checker {} on bar records {:?}", id, other)),
            }
        }
        if seen != self.checkers.len() {
            return broken(format!("{} checkers placed, {} exist", seen, self.checkers.len()));
        }
        Ok(())
    }

    /// Signed count of a cell: positive for White, negative for Black.
    fn signed_count(&self, cell: usize) -> i32 {
        let n = self.count(cell) as i32;
        match self.occupancy_color(cell) {
            Some(Color::Black) => -n,
            _ => n,
        }
    }

    fn format_row(&self, cells: impl Iterator<Item = usize>, labels: bool) -> String {
        cells
            .map(|i| if labels { format!("{:3}", i) } else { format!("{:3}", self.signed_count(i)) })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_fancy_string(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\nbar: W {} B {}",
            self.format_row((12..24).rev(), true),
            self.format_row((12..24).rev(), false),
            "=".repeat(47),
            self.format_row(0..12, false),
            self.format_row(0..12, true),
            self.bar_count(Color::White),
            self.bar_count(Color::Black),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Self::MAX_CHECKERS_PER_SIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position() {
        let board = Board::new(15);
        assert_eq!(board.total_checkers(), 30);
        assert_eq!(board.count(0), 15);
        assert_eq!(board.count(23), 15);
        assert_eq!(board.occupancy_color(0), Some(Color::White));
        assert_eq!(board.occupancy_color(23), Some(Color::Black));
        assert_eq!(board.occupancy_color(5), None);
        assert!(board.checkers().all(|c| c.position().is_some()));
        board.check_invariants().unwrap();
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let board = Board::new(15);
        assert_eq!(board.top_checker(24), None);
        assert_eq!(board.occupancy_color(100), None);
        assert!(!board.can_place(24, Color::White));
        assert_eq!(board.count(24), 0);
        assert!(board.cell(24).is_none());
    }

    #[test]
    fn top_checker_is_last_arrival() {
        let mut board = Board::empty();
        let a = board.place(Color::White, 5).unwrap();
        let b = board.place(Color::White, 5).unwrap();
        assert_eq!(board.top_checker(5), Some(b));
        assert!(board.is_top(b, 5));
        assert!(!board.is_top(a, 5));
        assert_eq!(board.cell(5), Some(&[a, b][..]));
    }

    #[test]
    fn place_refuses_to_mix_colors() {
        let mut board = Board::empty();
        board.place(Color::Black, 3).unwrap();
        let err = board.place(Color::White, 3).unwrap_err();
        assert!(matches!(err, Error::CellBlocked { cell: 3, owner: Color::Black }));
        assert!(matches!(board.place(Color::White, 24), Err(Error::InvalidCellIndex(24))));
    }

    #[test]
    fn place_stops_at_the_population_limit() {
        let mut board = Board::empty();
        for i in 0..Board::MAX_CHECKERS_PER_SIDE as usize {
            board.place(Color::White, i % CELL_COUNT).unwrap();
        }
        let before = board.to_fancy_string();

        for cell in [0, 5, 23] {
            assert!(matches!(
                board.place(Color::White, cell),
                Err(Error::TooManyCheckers { color: Color::White, limit: 15 })
            ));
        }
        assert_eq!(board.total_checkers(), 15);
        assert_eq!(board.to_fancy_string(), before);
        board.check_invariants().unwrap();

        // the other color still has room
        board.place(Color::Black, 20).unwrap();
        board.check_invariants().unwrap();
    }

    #[test]
    fn new_caps_checkers_per_side() {
        let board = Board::new(20);
        assert_eq!(board.total_checkers(), 30);
        assert_eq!(board.count(0), 15);
        assert_eq!(board.count(23), 15);
        assert_eq!(Board::new(4).total_checkers(), 8);
    }

    #[test]
    fn can_place_rules() {
        let mut board = Board::empty();
        board.place(Color::Black, 7).unwrap();
        assert!(board.can_place(7, Color::White));
        assert!(board.can_place(7, Color::Black));
        board.place(Color::Black, 7).unwrap();
        assert!(!board.can_place(7, Color::White));
        assert!(board.can_place(8, Color::White));
    }

    #[test]
    fn move_checker_updates_stacks_and_position() {
        let mut board = Board::new(15);
        let top = board.top_checker(0).unwrap();
        assert_eq!(board.move_checker(top, 0, 2).unwrap(), None);
        assert_eq!(board.count(0), 14);
        assert_eq!(board.top_checker(2), Some(top));
        assert_eq!(board.checker(top).unwrap().cell_index(), Some(2));
        board.check_invariants().unwrap();
    }

    #[test]
    fn failed_move_changes_nothing() {
        let mut board = Board::new(15);
        let white = board.top_checker(0).unwrap();
        let before = board.to_fancy_string();

        assert!(matches!(
            board.move_checker(white, 4, 6),
            Err(Error::CheckerNotInCell { cell: 4, .. })
        ));
        assert!(matches!(board.move_checker(white, 0, 24), Err(Error::InvalidCellIndex(24))));
        assert!(matches!(
            board.move_checker(white, 0, 23),
            Err(Error::CellBlocked { cell: 23, owner: Color::Black })
        ));
        assert!(matches!(
            board.move_checker(CheckerId(200), 0, 1),
            Err(Error::UnknownChecker(_))
        ));
        assert_eq!(board.to_fancy_string(), before);
        assert_eq!(board.checker(white).unwrap().cell_index(), Some(0));
    }

    #[test]
    fn landing_on_a_blot_hits_it() {
        let mut board = Board::empty();
        let white = board.place(Color::White, 2).unwrap();
        let black = board.place(Color::Black, 6).unwrap();

        let hit = board.move_checker(white, 2, 6).unwrap();
        assert_eq!(hit, Some(black));
        assert!(board.checker(black).unwrap().is_on_bar());
        assert_eq!(board.bar(Color::Black).collect::<Vec<_>>(), vec![black]);
        assert_eq!(board.occupancy_color(6), Some(Color::White));
        board.check_invariants().unwrap();

        // black re-enters on White's side of the track
        let hit = board.enter_checker(black, 20).unwrap();
        assert_eq!(hit, None);
        assert_eq!(board.bar_count(Color::Black), 0);
        assert_eq!(board.checker(black).unwrap().cell_index(), Some(20));
        board.check_invariants().unwrap();
    }

    #[test]
    fn enter_requires_checker_on_bar() {
        let mut board = Board::new(15);
        let white = board.top_checker(0).unwrap();
        assert!(matches!(board.enter_checker(white, 3), Err(Error::IllegalMove(_))));
    }

    #[test]
    fn fancy_string_shows_signed_counts() {
        let board = Board::new(15);
        let text = board.to_fancy_string();
        assert!(text.contains(" 15"));
        assert!(text.contains("-15"));
        assert!(text.ends_with("bar: W 0 B 0"));
    }
}
