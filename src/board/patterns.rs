//! Well-known starting patterns.
//!
//! Cells are listed as `(x, y)` relative to the pattern's top-left corner.
//! A pattern placed with an offset becomes a `CellGenerator`; anything that
//! falls off the board is dropped.

use crate::core::{Cell, CellState, Point};

use super::generator::CellGenerator;

/// A named arrangement of live cells.
pub struct Pattern {
    /// Lowercase name used for lookup.
    pub name: &'static str,
    /// Live cells as `(x, y)` offsets from the top-left corner.
    pub cells: &'static [(usize, usize)],
}

/// Every built-in pattern.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
];

impl Pattern {
    /// Look up a pattern by name, ignoring case.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Smallest width and height that contain the pattern.
    #[must_use]
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Place the pattern with its top-left corner at `origin`.
    #[must_use]
    pub fn at(&'static self, origin: Point) -> Placed {
        Placed { pattern: self, origin }
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern({})", self.name)
    }
}

/// A pattern positioned on a board.
#[derive(Clone, Copy, Debug)]
pub struct Placed {
    pattern: &'static Pattern,
    origin: Point,
}

impl Placed {
    fn is_alive(&self, x: usize, y: usize) -> bool {
        let (Some(dx), Some(dy)) = (x.checked_sub(self.origin.x), y.checked_sub(self.origin.y)) else {
            return false;
        };
        self.pattern.cells.contains(&(dx, dy))
    }
}

impl CellGenerator for Placed {
    fn generate(&mut self, x: usize, y: usize) -> Cell {
        Cell::with_state(CellState::from(self.is_alive(x, y)))
    }
}
