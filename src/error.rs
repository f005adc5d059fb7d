//! Error types surfaced by the simulation core.
//!
//! Every variant is a deterministic data error: retrying the same input
//! produces the same error.

/// Errors returned by board construction and the token codec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// Requested width or height is not positive or exceeds the 32-bit wire range.
    #[error("invalid board dimensions {width}x{height} (both sides must be 1..=2147483647)")]
    InvalidDimension {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },

    /// Token is not valid percent-encoded base64.
    #[error("token is not valid base64: {0}")]
    TokenDecode(String),

    /// Decoded bytes are not a zlib stream.
    #[error("token payload failed to decompress: {0}")]
    Decompression(String),

    /// Inflated bytes do not form a complete, consistent set of cell records.
    #[error("malformed cell records: {0}")]
    MalformedRecord(String),

    /// Token decoded to zero records, so the board size is unknown.
    #[error("token contains no cells")]
    EmptyBoard,
}

/// Result alias for core operations.
pub type LifeResult<T> = Result<T, LifeError>;
