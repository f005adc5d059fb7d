//! zlib framing for record payloads.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{LifeError, LifeResult};

/// Largest payload [`inflate`] will produce: 16 MiB, a little under two
/// million cells.
pub const MAX_INFLATED_LEN: usize = 16 * 1024 * 1024;

/// Compress `bytes` into a zlib stream.
///
/// # Panics
///
/// Never in practice: the encoder writes into an in-memory buffer, which
/// cannot fail.
#[must_use]
pub fn deflate(bytes: &[u8], level: u32) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(bytes)
        .expect("zlib compression into memory cannot fail");
    encoder
        .finish()
        .expect("zlib compression into memory cannot fail")
}

/// Decompress a complete zlib stream of at most [`MAX_INFLATED_LEN`] bytes.
///
/// Bytes after the end of the stream are ignored.
///
/// # Errors
///
/// Returns `LifeError::Decompression` if the header or data is invalid, the
/// stream ends before its final block, or the output exceeds the limit.
pub fn inflate(bytes: &[u8]) -> LifeResult<Vec<u8>> {
    inflate_limited(bytes, MAX_INFLATED_LEN)
}

/// Decompress a complete zlib stream of at most `limit` bytes.
///
/// # Errors
///
/// Same as [`inflate`].
pub fn inflate_limited(bytes: &[u8], limit: usize) -> LifeResult<Vec<u8>> {
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut out = Vec::new();
    ZlibDecoder::new(bytes)
        .take(cap)
        .read_to_end(&mut out)
        .map_err(|e| LifeError::Decompression(e.to_string()))?;

    if out.len() > limit {
        return Err(LifeError::Decompression(format!(
            "decompressed payload exceeds {} bytes",
            limit
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_levels() {
        let data: Vec<u8> = (0..2000u32).map(|i| (i % 7) as u8).collect();
        for level in [0, 1, 6, 9] {
            assert_eq!(inflate(&deflate(&data, level)).unwrap(), data, "level {}", level);
        }
    }

    #[test]
    fn test_zlib_header() {
        let compressed = deflate(b"life", 6);
        // CMF byte for deflate with a 32K window
        assert_eq!(compressed[0], 0x78);
    }

    #[test]
    fn test_inflate_large_expansion() {
        let data = vec![0u8; 1 << 20];
        let compressed = deflate(&data, 9);
        assert!(compressed.len() < 4096);
        assert_eq!(inflate(&compressed).unwrap().len(), data.len());
    }

    #[test]
    fn test_inflate_high_ratio_payload() {
        // 100 KB of a short repeating pattern compresses far beyond 4x
        let data: Vec<u8> = (0..100_000u32).map(|i| [0, 0, 0, 0, 1][(i % 5) as usize]).collect();
        let compressed = deflate(&data, 6);
        assert!(compressed.len() * 4 < data.len());

        let inflated = inflate(&compressed).unwrap();
        assert_eq!(inflated.len(), data.len());
        assert_eq!(inflated, data);
    }

    #[test]
    fn test_inflate_limit() {
        let data = vec![0u8; 10_000];
        let compressed = deflate(&data, 9);

        assert_eq!(inflate_limited(&compressed, 10_000).unwrap(), data);
        let err = inflate_limited(&compressed, 9_999).unwrap_err();
        assert!(matches!(err, LifeError::Decompression(_)));
    }

    #[test]
    fn test_inflate_rejects_oversized_payload() {
        let compressed = deflate(&vec![0u8; MAX_INFLATED_LEN + 1], 9);
        assert!(matches!(inflate(&compressed), Err(LifeError::Decompression(_))));
    }

    #[test]
    fn test_inflate_garbage() {
        let err = inflate(b"definitely not zlib").unwrap_err();
        assert!(matches!(err, LifeError::Decompression(_)));
    }

    #[test]
    fn test_inflate_empty() {
        assert!(matches!(inflate(&[]), Err(LifeError::Decompression(_))));
    }

    #[test]
    fn test_inflate_truncated() {
        let data: Vec<u8> = (0..500u32).map(|i| (i * 31 % 251) as u8).collect();
        let compressed = deflate(&data, 6);
        let truncated = &compressed[..compressed.len() / 2];

        assert!(matches!(inflate(truncated), Err(LifeError::Decompression(_))));
    }

    #[test]
    fn test_inflate_ignores_trailing_bytes() {
        let mut compressed = deflate(b"abc", 6);
        compressed.extend_from_slice(b"junk");
        assert_eq!(inflate(&compressed).unwrap(), b"abc");
    }
}
