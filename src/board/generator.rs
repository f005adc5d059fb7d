//! Per-coordinate cell generators used to initialize boards.
//!
//! Any `FnMut(usize, usize) -> Cell` is a generator, which is how decoded
//! tokens and test fixtures are turned into boards:
//!
//! ```
//! use rust_life::board::Board;
//! use rust_life::core::{Cell, CellState, Dimensions};
//!
//! let dims = Dimensions::new(3, 3).unwrap();
//! let diagonal = Board::from_fn(dims, |x, y| Cell::with_state(CellState::from(x == y)));
//! assert_eq!(diagonal.population(), 3);
//! ```

use crate::core::{Cell, CellState, LifeRng};

/// Produces the cell for a coordinate.
///
/// Called exactly once per coordinate, in row-major order.
pub trait CellGenerator {
    /// Produce the cell at `(x, y)`. The returned point is ignored.
    fn generate(&mut self, x: usize, y: usize) -> Cell;
}

impl<F> CellGenerator for F
where
    F: FnMut(usize, usize) -> Cell,
{
    fn generate(&mut self, x: usize, y: usize) -> Cell {
        self(x, y)
    }
}

/// Uniformly random cells: each cell is a fair coin flip.
#[derive(Debug)]
pub struct RandomCells<'a> {
    rng: &'a mut LifeRng,
}

impl<'a> RandomCells<'a> {
    /// Draw cells from `rng`.
    pub fn new(rng: &'a mut LifeRng) -> Self {
        Self { rng }
    }
}

impl CellGenerator for RandomCells<'_> {
    fn generate(&mut self, _x: usize, _y: usize) -> Cell {
        Cell::with_state(CellState::from(self.rng.gen_bool()))
    }
}
