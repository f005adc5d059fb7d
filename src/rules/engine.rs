//! Rules trait for the evolution engine.
//!
//! The engine asks a `Rules` implementation for each cell's next state,
//! handing it the cell and its neighbors from the previous generation.
//! Implementations must be pure: the same inputs always give the same state.

use crate::core::{Cell, CellState};

use super::conditions::{
    evolves_to_next_generation, is_overpopulated, is_underpopulated, should_become_alive,
};

/// Transition rules.
pub trait Rules {
    /// Compute the state of `cell` in the next generation.
    fn next_state(&self, cell: &Cell, neighbors: &[Cell]) -> CellState;
}

/// Conway's B3/S23 rules.
///
/// Conditions are checked in a fixed order: underpopulation, survival,
/// overpopulation, reproduction. If none applies the state carries over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassicRules;

impl Rules for ClassicRules {
    fn next_state(&self, cell: &Cell, neighbors: &[Cell]) -> CellState {
        if is_underpopulated(cell, neighbors) {
            CellState::Dead
        } else if evolves_to_next_generation(cell, neighbors) {
            CellState::Life
        } else if is_overpopulated(cell, neighbors) {
            CellState::Dead
        } else if should_become_alive(cell, neighbors) {
            CellState::Life
        } else {
            cell.state
        }
    }
}
