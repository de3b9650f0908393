//! LZMA compression adapter
//!
//! Wraps the xz2 primitive behind [`CompressionPort`]. The primitive is
//! CPU-bound, so both directions run on the blocking pool; the caller's
//! event loop never stalls.
//!
//! Decompression output typing follows one explicit rule: the result is
//! reported as text iff it is valid UTF-8, otherwise as raw bytes.

use std::io::Read;

use async_trait::async_trait;
use bytes::Bytes;
use xz2::read::{XzDecoder, XzEncoder};

use up_core::ports::{CompressionError, CompressionLevel, CompressionPort, Inflated};

#[derive(Debug, Default)]
pub struct XzCompressor;

impl XzCompressor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompressionPort for XzCompressor {
    async fn compress(
        &self,
        data: Bytes,
        level: CompressionLevel,
    ) -> Result<Bytes, CompressionError> {
        let compressed = tokio::task::spawn_blocking(move || -> std::io::Result<Vec<u8>> {
            let mut out = Vec::new();
            XzEncoder::new(data.as_ref(), level.preset()).read_to_end(&mut out)?;
            Ok(out)
        })
        .await
        .map_err(|e| CompressionError::new(e.to_string()))?
        .map_err(|e| CompressionError::new(e.to_string()))?;

        Ok(Bytes::from(compressed))
    }

    async fn decompress(&self, data: Bytes) -> Result<Inflated, CompressionError> {
        let raw = tokio::task::spawn_blocking(move || -> std::io::Result<Vec<u8>> {
            let mut out = Vec::new();
            XzDecoder::new(data.as_ref()).read_to_end(&mut out)?;
            Ok(out)
        })
        .await
        .map_err(|e| CompressionError::new(e.to_string()))?
        .map_err(|e| CompressionError::new(e.to_string()))?;

        Ok(match String::from_utf8(raw) {
            Ok(text) => Inflated::Text(text),
            Err(e) => Inflated::Bytes(Bytes::from(e.into_bytes())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_text() {
        let compressor = XzCompressor::new();
        let compressed = compressor
            .compress(Bytes::from_static(b"hello xz"), CompressionLevel::MAX)
            .await
            .unwrap();

        match compressor.decompress(compressed).await.unwrap() {
            Inflated::Text(text) => assert_eq!(text, "hello xz"),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_round_trip_binary_reports_bytes() {
        let compressor = XzCompressor::new();
        let original = vec![0xFFu8, 0xFE, 0x00, 0x80, 0x81];
        let compressed = compressor
            .compress(Bytes::from(original.clone()), CompressionLevel::MAX)
            .await
            .unwrap();

        match compressor.decompress(compressed).await.unwrap() {
            Inflated::Bytes(bytes) => assert_eq!(bytes.as_ref(), original.as_slice()),
            other => panic!("expected bytes, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_round_trip_empty_input() {
        let compressor = XzCompressor::new();
        let compressed = compressor
            .compress(Bytes::new(), CompressionLevel::MAX)
            .await
            .unwrap();
        assert!(!compressed.is_empty());

        match compressor.decompress(compressed).await.unwrap() {
            Inflated::Text(text) => assert_eq!(text, ""),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_corrupt_stream_fails() {
        let compressor = XzCompressor::new();
        let result = compressor
            .decompress(Bytes::from_static(b"definitely not an xz stream"))
            .await;
        assert!(result.is_err());
    }
}
