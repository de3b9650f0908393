//! Compression port - abstracts the external compression primitive
//!
//! The primitive is an opaque library exposing compress/decompress.
//! Both operations are asynchronous relative to the caller and are the
//! only suspending operations in the system.

use async_trait::async_trait;
use bytes::Bytes;

use super::errors::CompressionError;

/// Strength passed to the compression primitive.
///
/// The codec bridge pins [`CompressionLevel::MAX`], a fixed trade-off
/// favoring size over speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    /// Maximum supported strength (preset 9).
    pub const MAX: Self = Self(9);

    pub fn new(level: u32) -> Self {
        Self(level.min(Self::MAX.0))
    }

    pub fn preset(self) -> u32 {
        self.0
    }
}

/// Decompression output as reported by the primitive: decoded text when
/// the content was detected as text, a raw byte buffer otherwise.
///
/// The codec bridge normalizes this into
/// [`DecodedPayload`](crate::payload::DecodedPayload) before anything
/// else sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inflated {
    Text(String),
    Bytes(Bytes),
}

#[async_trait]
pub trait CompressionPort: Send + Sync {
    /// Compress a byte sequence at the given strength.
    async fn compress(
        &self,
        data: Bytes,
        level: CompressionLevel,
    ) -> Result<Bytes, CompressionError>;

    /// Decompress a byte sequence.
    ///
    /// Fails when the input is not a valid compressed stream.
    async fn decompress(&self, data: Bytes) -> Result<Inflated, CompressionError>;
}
