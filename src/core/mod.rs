//! Core types: coordinates, cells, RNG, configuration.
//!
//! These are the building blocks shared by the rules, the board, and the
//! token codec.

pub mod geometry;
pub mod cell;
pub mod rng;
pub mod config;

pub use geometry::{Dimensions, Point};
pub use cell::{Cell, CellState};
pub use rng::LifeRng;
pub use config::{CodecConfig, LifeConfig, Transport};
