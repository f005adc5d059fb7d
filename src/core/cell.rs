//! Cells and their two states.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Whether a cell is alive.
///
/// The discriminants are the state byte used on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum CellState {
    /// Empty cell.
    #[default]
    Dead = 0,
    /// Living cell.
    Life = 1,
}

impl CellState {
    /// The state byte written to the wire.
    #[must_use]
    pub const fn as_byte(self) -> i8 {
        self as i8
    }
}

impl TryFrom<i8> for CellState {
    type Error = i8;

    fn try_from(byte: i8) -> Result<Self, Self::Error> {
        match byte {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Life),
            other => Err(other),
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Life
        } else {
            CellState::Dead
        }
    }
}

/// A single grid position and its state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Position on the board.
    pub point: Point,
    /// Current state.
    pub state: CellState,
}

impl Cell {
    /// Create a cell at a point.
    #[must_use]
    pub const fn new(point: Point, state: CellState) -> Self {
        Self { point, state }
    }

    /// A cell with the given state and no meaningful position.
    ///
    /// Useful for generators, whose returned point is always replaced, and
    /// for neighbor lists where only the state matters.
    #[must_use]
    pub const fn with_state(state: CellState) -> Self {
        Self {
            point: Point::new(0, 0),
            state,
        }
    }

    /// A living cell with no meaningful position.
    #[must_use]
    pub const fn alive() -> Self {
        Self::with_state(CellState::Life)
    }

    /// A dead cell with no meaningful position.
    #[must_use]
    pub const fn dead() -> Self {
        Self::with_state(CellState::Dead)
    }

    /// Whether the cell is living.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        matches!(self.state, CellState::Life)
    }

    /// Whether the cell is dead.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        !self.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_bytes() {
        assert_eq!(CellState::Dead.as_byte(), 0);
        assert_eq!(CellState::Life.as_byte(), 1);
    }

    #[test]
    fn test_state_try_from() {
        assert_eq!(CellState::try_from(0), Ok(CellState::Dead));
        assert_eq!(CellState::try_from(1), Ok(CellState::Life));
        assert_eq!(CellState::try_from(2), Err(2));
        assert_eq!(CellState::try_from(-1), Err(-1));
    }

    #[test]
    fn test_cell_equality_uses_both_fields() {
        let a = Cell::new(Point::new(1, 2), CellState::Life);
        let b = Cell::new(Point::new(1, 2), CellState::Life);
        let c = Cell::new(Point::new(2, 1), CellState::Life);
        let d = Cell::new(Point::new(1, 2), CellState::Dead);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_alive_dead() {
        assert!(Cell::alive().is_alive());
        assert!(Cell::dead().is_dead());
        assert_eq!(Cell::default().state, CellState::Dead);
    }

    #[test]
    fn test_cell_serde() {
        let cell = Cell::new(Point::new(3, 4), CellState::Life);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
