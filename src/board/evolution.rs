//! Advancing a board by one generation.
//!
//! Every cell of the next generation is computed from the previous grid
//! only. The new grid is built in full through `Board::from_fn`, then
//! replaces the old one in a single assignment, so no rule ever sees a
//! half-updated neighborhood.

use crate::core::Cell;
use crate::rules::{ClassicRules, Rules};

use super::grid::Board;

impl Board {
    /// Compute the next generation under `rules`, leaving `self` untouched.
    #[must_use]
    pub fn evolve_with<R: Rules + ?Sized>(&self, rules: &R) -> Board {
        Board::from_fn(self.dimensions, |x, y| {
            let cell = self.grid[y][x];
            let neighbors = self.neighbors(cell.point);
            Cell::with_state(rules.next_state(&cell, &neighbors))
        })
    }

    /// Compute the next generation under the classic rules.
    #[must_use]
    pub fn evolve(&self) -> Board {
        self.evolve_with(&ClassicRules)
    }

    /// Replace this board with its next generation under `rules`.
    pub fn next_with<R: Rules + ?Sized>(&mut self, rules: &R) {
        *self = self.evolve_with(rules);
    }

    /// Replace this board with its next generation.
    pub fn next(&mut self) {
        self.next_with(&ClassicRules);
    }

    /// Step forward one generation, returning the generation that was
    /// current before the step.
    pub fn advance(&mut self) -> Board {
        let next = self.evolve();
        std::mem::replace(self, next)
    }

    /// True if the next generation is identical to this one.
    #[must_use]
    pub fn is_still_life(&self) -> bool {
        self.evolve() == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellState, Dimensions, LifeRng};

    fn board_from(rows: &[&[u8]]) -> Board {
        let dims = Dimensions::new(rows[0].len() as i64, rows.len() as i64).unwrap();
        Board::from_fn(dims, |x, y| Cell::with_state(CellState::from(rows[y][x] == 1)))
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let mut board = Board::empty(Dimensions::new(6, 4).unwrap());
        board.next();
        assert!(board.is_extinct());
    }

    #[test]
    fn test_block_is_still_life() {
        let board = board_from(&[
            &[0, 0, 0, 0],
            &[0, 1, 1, 0],
            &[0, 1, 1, 0],
            &[0, 0, 0, 0],
        ]);
        assert!(board.is_still_life());
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut board = board_from(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        board.next();
        assert!(board.is_extinct());
    }

    #[test]
    fn test_corner_l_becomes_block() {
        let mut board = board_from(&[&[0, 0, 0], &[0, 1, 1], &[0, 0, 1]]);
        board.next();
        assert_eq!(board, board_from(&[&[0, 0, 0], &[0, 1, 1], &[0, 1, 1]]));
    }

    #[test]
    fn test_advance_returns_previous() {
        let original = board_from(&[&[1, 0, 1], &[0, 1, 0], &[0, 0, 0]]);
        let mut board = original.clone();

        let previous = board.advance();

        assert_eq!(previous, original);
        assert_eq!(board, board_from(&[&[0, 1, 0], &[0, 1, 0], &[0, 0, 0]]));
    }

    #[test]
    fn test_evolve_does_not_mutate() {
        let board = Board::random(Dimensions::new(10, 10).unwrap(), &mut LifeRng::new(5));
        let snapshot = board.clone();
        let _ = board.evolve();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_next_with_custom_rules() {
        struct Flip;
        impl Rules for Flip {
            fn next_state(&self, cell: &Cell, _: &[Cell]) -> CellState {
                CellState::from(cell.is_dead())
            }
        }

        let mut board = board_from(&[&[1, 0], &[0, 1]]);
        board.next_with(&Flip);
        assert_eq!(board, board_from(&[&[0, 1], &[1, 0]]));
    }
}
