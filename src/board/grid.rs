//! The rectangular cell grid.
//!
//! ## Invariants
//!
//! - `grid` has `height` rows of `width` cells each
//! - `grid[y][x].point == Point { x, y }` for every cell
//!
//! Both hold by construction: the only way to build a `Board` is through a
//! `CellGenerator`, and the constructor assigns every point itself.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{Cell, CellState, Dimensions, LifeRng, Point};

use super::generator::{CellGenerator, RandomCells};

/// Neighbor list for one cell. At most eight entries.
pub type Neighbors = SmallVec<[Cell; 8]>;

/// Offsets of the eight surrounding cells, row by row.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// One generation of the simulation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    pub(super) dimensions: Dimensions,
    pub(super) grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board by asking `generator` for every cell in row-major order.
    ///
    /// The point on each returned cell is ignored and replaced with `(x, y)`.
    pub fn from_generator<G: CellGenerator>(dimensions: Dimensions, mut generator: G) -> Self {
        let mut grid = Vec::with_capacity(dimensions.height());
        for y in 0..dimensions.height() {
            let mut row = Vec::with_capacity(dimensions.width());
            for x in 0..dimensions.width() {
                let generated = generator.generate(x, y);
                row.push(Cell::new(Point::new(x, y), generated.state));
            }
            grid.push(row);
        }

        Self { dimensions, grid }
    }

    /// Build a board from a closure over `(x, y)`.
    ///
    /// Shorthand for [`Board::from_generator`] that lets the closure's
    /// argument types be inferred.
    pub fn from_fn<F>(dimensions: Dimensions, f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        Self::from_generator(dimensions, f)
    }

    /// Build a board where every cell is an independent coin flip.
    pub fn random(dimensions: Dimensions, rng: &mut LifeRng) -> Self {
        Self::from_generator(dimensions, RandomCells::new(rng))
    }

    /// Build an all-dead board.
    #[must_use]
    pub fn empty(dimensions: Dimensions) -> Self {
        Self::from_fn(dimensions, |_, _| Cell::dead())
    }

    /// Width and height of the board.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.dimensions.width()
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.dimensions.height()
    }

    /// Cell at `(x, y)`, or `None` off the board.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.get(y)?.get(x)
    }

    /// Cell at a point, or `None` off the board.
    #[must_use]
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.get(point.x, point.y)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.iter().map(Vec::as_slice)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Cell states as a row-major matrix.
    #[must_use]
    pub fn states(&self) -> Vec<Vec<CellState>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|cell| cell.state).collect())
            .collect()
    }

    /// Number of living cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells().filter(|cell| cell.is_alive()).count()
    }

    /// True if no cell is alive.
    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.cells().all(Cell::is_dead)
    }

    /// Cells adjacent to `point`, diagonals included.
    ///
    /// Positions off the board are skipped, so corners have three neighbors
    /// and edges five. There is no wraparound.
    #[must_use]
    pub fn neighbors(&self, point: Point) -> Neighbors {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| point.offset(dx, dy))
            .filter_map(|neighbor| self.cell(neighbor))
            .copied()
            .collect()
    }
}

impl std::fmt::Display for Board {
    /// One line per row, `#` for living cells and `.` for dead ones.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
