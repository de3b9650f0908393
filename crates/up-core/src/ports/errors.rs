use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the external compression primitive.
///
/// The primitive is opaque; all we keep is its message. The codec
/// bridge assigns the error kind from the operation that failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CompressionError {
    message: String,
}

impl CompressionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Unified error taxonomy of the codec bridge.
///
/// All variants are non-fatal and travel to the caller over the same
/// response channel as success. No retries are performed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed base64 in a decode request; detected synchronously,
    /// no decompression is attempted.
    #[error("invalid base64 encoding")]
    InvalidEncoding,

    #[error("compression failed: {0}")]
    CompressionFailed(String),

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),
}

impl CodecError {
    pub fn kind(&self) -> CodecErrorKind {
        match self {
            CodecError::InvalidEncoding => CodecErrorKind::InvalidEncoding,
            CodecError::CompressionFailed(_) => CodecErrorKind::CompressionFailed,
            CodecError::DecompressionFailed(_) => CodecErrorKind::DecompressionFailed,
        }
    }
}

/// Discriminant of [`CodecError`] as it crosses the host boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CodecErrorKind {
    InvalidEncoding,
    CompressionFailed,
    DecompressionFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            CodecError::InvalidEncoding.kind(),
            CodecErrorKind::InvalidEncoding
        );
        assert_eq!(
            CodecError::DecompressionFailed("bad stream".into()).kind(),
            CodecErrorKind::DecompressionFailed
        );
    }

    #[test]
    fn test_messages_carry_primitive_detail() {
        let err = CodecError::CompressionFailed(CompressionError::new("out of memory").to_string());
        assert_eq!(err.to_string(), "compression failed: out of memory");
    }
}
