//! # rust-life
//!
//! Conway's Game of Life on a finite grid, with the current generation
//! carried between interactions as a self-describing token instead of
//! server-side state.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: A token is the whole state. Nothing is kept between
//!    `start` and `advance`; every operation is a pure function of its input.
//!
//! 2. **Snapshot Evolution**: The next generation is built in full from the
//!    previous one, then swapped in. No rule sees a half-updated grid.
//!
//! 3. **Explicit Randomness**: Random boards draw from an owned, seeded
//!    `LifeRng`. There is no global random state.
//!
//! ## Token Format
//!
//! Dense 9-byte records (`x: i32 LE`, `y: i32 LE`, `state: i8`) for every
//! cell in row-major order, zlib-compressed and base64-encoded, optionally
//! percent-escaped for URLs. See [`codec::record`].
//!
//! ## Modules
//!
//! - `core`: Coordinates, cells, RNG, configuration
//! - `rules`: Transition conditions and the `Rules` trait
//! - `board`: The grid, generators, evolution, patterns
//! - `codec`: Records, compression, tokens
//! - `api`: `start` and `advance`
//! - `error`: `LifeError`

pub mod core;
pub mod rules;
pub mod board;
pub mod codec;
pub mod api;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Cell, CellState, Point, Dimensions,
    LifeRng,
    CodecConfig, LifeConfig, Transport,
};

pub use crate::rules::{ClassicRules, Rules};

pub use crate::board::{Board, CellGenerator, RandomCells, Pattern};

pub use crate::codec::{decode, encode, Token};

pub use crate::api::{advance, start, Advanced, Life, Started};

pub use crate::error::{LifeError, LifeResult};
