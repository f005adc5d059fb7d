//! Start and advance: the interface used by request handlers.
//!
//! A front end (web handler, CLI) holds no state between interactions.
//! Each interaction either starts a new random board or advances the board
//! carried in a token:
//!
//! ```
//! use rust_life::api::{advance, start};
//!
//! let started = start(6, 4).unwrap();
//! let advanced = advance(started.token.as_str()).unwrap();
//!
//! assert_eq!(advanced.previous, started.board);
//! assert_eq!(advanced.board, started.board.evolve());
//! ```

use crate::board::Board;
use crate::codec::{self, Token};
use crate::core::{Dimensions, LifeConfig, LifeRng};
use crate::error::LifeResult;

/// A freshly started board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Started {
    /// The random initial generation.
    pub board: Board,
    /// Token for `board`.
    pub token: Token,
    /// Seed that produced `board`.
    pub seed: u64,
}

/// The result of advancing one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advanced {
    /// The generation decoded from the incoming token.
    pub previous: Board,
    /// The new current generation.
    pub board: Board,
    /// Token for `board`.
    pub token: Token,
}

/// Simulation front door with its configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Life {
    config: LifeConfig,
}

impl Life {
    /// Create a handler with the given configuration.
    #[must_use]
    pub fn new(config: LifeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Start a random `width` x `height` board.
    ///
    /// Uses the configured seed if there is one, otherwise a fresh seed.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::InvalidDimension` if either side is not positive.
    pub fn start(&self, width: i64, height: i64) -> LifeResult<Started> {
        let mut rng = match self.config.seed {
            Some(seed) => LifeRng::new(seed),
            None => LifeRng::from_entropy(),
        };
        self.start_with_rng(width, height, &mut rng)
    }

    /// Start a random board drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::InvalidDimension` if either side is not positive.
    pub fn start_with_rng(&self, width: i64, height: i64, rng: &mut LifeRng) -> LifeResult<Started> {
        let dimensions = Dimensions::new(width, height)?;
        let board = Board::random(dimensions, rng);
        Ok(Started {
            token: self.encode(&board),
            board,
            seed: rng.seed(),
        })
    }

    /// Decode a token, step it forward once, and encode the result.
    ///
    /// # Errors
    ///
    /// Any decode error from [`codec::decode`].
    pub fn advance(&self, token: &str) -> LifeResult<Advanced> {
        let mut board = codec::decode(token)?;
        let previous = board.advance();
        Ok(Advanced {
            token: self.encode(&board),
            previous,
            board,
        })
    }

    /// Encode a board with the configured codec settings.
    #[must_use]
    pub fn encode(&self, board: &Board) -> Token {
        codec::encode(board, &self.config.codec)
    }
}

/// Start a random board with the default configuration.
///
/// # Errors
///
/// Returns `LifeError::InvalidDimension` if either side is not positive.
pub fn start(width: i64, height: i64) -> LifeResult<Started> {
    Life::default().start(width, height)
}

/// Advance a token by one generation with the default configuration.
///
/// # Errors
///
/// Any decode error from [`codec::decode`].
pub fn advance(token: &str) -> LifeResult<Advanced> {
    Life::default().advance(token)
}
