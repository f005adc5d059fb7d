//! Transport tokens.
//!
//! ## Pipeline
//!
//! ```text
//! encode: Board -> dense records -> zlib -> base64 (standard, padded) [-> percent-escape]
//! decode: text  -> percent-unescape -> base64 -> inflate -> records -> Board
//! ```
//!
//! Percent-unescaping is always applied on decode. Plain base64 contains no
//! `%`, so the step is a no-op for unescaped tokens.
//!
//! ```
//! use rust_life::board::Board;
//! use rust_life::codec::{decode, encode};
//! use rust_life::core::{CodecConfig, Dimensions, LifeRng};
//!
//! let board = Board::random(Dimensions::new(8, 6).unwrap(), &mut LifeRng::new(1));
//! let token = encode(&board, &CodecConfig::default());
//! assert_eq!(decode(token.as_str()).unwrap(), board);
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::board::Board;
use crate::core::{CodecConfig, Transport};
use crate::error::{LifeError, LifeResult};

use super::compress::{deflate, inflate};
use super::record::{assemble, encode_board, read_records};

/// Characters escaped in a URL query component: everything except
/// ASCII alphanumerics and `-_.~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// An encoded board, ready for transport.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the token text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the token text is empty. Never true for an encoded board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode this token back into a board.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn decode(&self) -> LifeResult<Board> {
        decode(&self.0)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

/// Encode a board as a token.
#[must_use]
pub fn encode(board: &Board, config: &CodecConfig) -> Token {
    let raw = encode_board(board);
    let compressed = deflate(&raw, config.compression_level);
    let text = STANDARD.encode(compressed);

    match config.transport {
        Transport::Plain => Token(text),
        Transport::Url => Token(utf8_percent_encode(&text, QUERY_COMPONENT).to_string()),
    }
}

/// Decode a token, plain or percent-escaped, into a board.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// - `LifeError::TokenDecode` if the text is not (percent-escaped) base64
/// - `LifeError::Decompression` if the payload is not a zlib stream
/// - `LifeError::MalformedRecord` if the records are incomplete or inconsistent
/// - `LifeError::EmptyBoard` if there are no records
pub fn decode(token: &str) -> LifeResult<Board> {
    let text = percent_decode_str(token.trim())
        .decode_utf8()
        .map_err(|e| LifeError::TokenDecode(e.to_string()))?;

    let compressed = STANDARD
        .decode(text.as_bytes())
        .map_err(|e| LifeError::TokenDecode(e.to_string()))?;

    let raw = inflate(&compressed)?;
    let records = read_records(&raw)?;
    assemble(&records)
}
