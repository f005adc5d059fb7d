//! The four classical transition conditions.
//!
//! Each predicate takes the cell and an explicitly supplied neighbor list;
//! nothing is looked up. Predicates for live cells return `false` for dead
//! cells and vice versa, so at most one of "evolves" and the two death
//! conditions holds for a live cell, and exactly one always does.

use crate::core::Cell;

/// Number of living cells in a neighbor list.
#[must_use]
pub fn count_living(neighbors: &[Cell]) -> usize {
    neighbors.iter().filter(|n| n.is_alive()).count()
}

/// A live cell with fewer than two live neighbors dies.
#[must_use]
pub fn is_underpopulated(cell: &Cell, neighbors: &[Cell]) -> bool {
    cell.is_alive() && count_living(neighbors) < 2
}

/// A live cell with two or three live neighbors lives on.
#[must_use]
pub fn evolves_to_next_generation(cell: &Cell, neighbors: &[Cell]) -> bool {
    cell.is_alive() && matches!(count_living(neighbors), 2 | 3)
}

/// A live cell with more than three live neighbors dies.
#[must_use]
pub fn is_overpopulated(cell: &Cell, neighbors: &[Cell]) -> bool {
    cell.is_alive() && count_living(neighbors) > 3
}

/// A dead cell with exactly three live neighbors is born.
#[must_use]
pub fn should_become_alive(cell: &Cell, neighbors: &[Cell]) -> bool {
    cell.is_dead() && count_living(neighbors) == 3
}
