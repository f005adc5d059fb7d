//! State codec: boards to transport tokens and back.
//!
//! - `record`: The dense 9-byte-per-cell binary layout
//! - `compress`: zlib framing
//! - `token`: base64 and percent-escaping, plus the `encode`/`decode` entry points

pub mod record;
pub mod compress;
pub mod token;

pub use record::{DenseRecord, RECORD_SIZE};
pub use token::{decode, encode, Token};
