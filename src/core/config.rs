//! Configuration types.
//!
//! - `CodecConfig`: How tokens are compressed and carried
//! - `LifeConfig`: Combines codec settings with board seeding
//!
//! Everything has a sensible `Default`; override with the `with_*` builders.

use serde::{Deserialize, Serialize};

/// How a token is carried between interactions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    /// Raw standard base64 (form fields, templates, files).
    #[default]
    Plain,
    /// Standard base64, percent-escaped for a URL query component.
    Url,
}

/// Token codec settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Text form of encoded tokens.
    pub transport: Transport,

    /// zlib compression level (0 = store, 9 = best).
    pub compression_level: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            transport: Transport::Plain,
            compression_level: 6,
        }
    }
}

impl CodecConfig {
    /// Highest accepted compression level.
    pub const MAX_COMPRESSION_LEVEL: u32 = 9;

    /// Set the transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Set the compression level, clamped to 0-9.
    #[must_use]
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(Self::MAX_COMPRESSION_LEVEL);
        self
    }
}

/// Complete simulation configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Seed for random boards. `None` draws a fresh seed for every board.
    pub seed: Option<u64>,

    /// Token codec settings.
    pub codec: CodecConfig,
}

impl LifeConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed for random boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the token transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.codec = self.codec.with_transport(transport);
        self
    }

    /// Replace the codec settings.
    #[must_use]
    pub fn with_codec(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.transport, Transport::Plain);
        assert_eq!(config.compression_level, 6);
    }

    #[test]
    fn test_compression_level_clamped() {
        let config = CodecConfig::default().with_compression_level(42);
        assert_eq!(config.compression_level, 9);

        let config = CodecConfig::default().with_compression_level(0);
        assert_eq!(config.compression_level, 0);
    }

    #[test]
    fn test_life_config_builder() {
        let config = LifeConfig::new().with_seed(7).with_transport(Transport::Url);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.codec.transport, Transport::Url);
        assert_eq!(config.codec.compression_level, 6);
    }

    #[test]
    fn test_life_config_default_unseeded() {
        assert_eq!(LifeConfig::default().seed, None);
    }

    #[test]
    fn test_config_serde() {
        let config = LifeConfig::new()
            .with_seed(99)
            .with_codec(CodecConfig::default().with_compression_level(9));

        let json = serde_json::to_string(&config).unwrap();
        let back: LifeConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}
