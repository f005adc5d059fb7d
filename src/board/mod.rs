//! Boards, their initialization, and evolution.
//!
//! - `grid`: The `Board` type and neighbor queries
//! - `generator`: `CellGenerator`, the per-coordinate constructor, and
//!   `RandomCells`
//! - `evolution`: One-generation steps over a fixed snapshot
//! - `patterns`: Named starting patterns usable as generators

pub mod grid;
pub mod generator;
pub mod evolution;
pub mod patterns;

pub use grid::{Board, Neighbors};
pub use generator::{CellGenerator, RandomCells};
pub use patterns::{Pattern, Placed, PATTERNS};
