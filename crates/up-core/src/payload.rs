//! Decoded payload model
//!
//! The decompression primitive reports either text or a raw byte buffer
//! depending on what it detected. [`DecodedPayload`] is the single
//! representation the rest of the system sees; the adapter's reported
//! kind never leaks untyped past the codec bridge.

use serde::{Deserialize, Serialize};

use crate::ports::Inflated;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedPayload {
    /// UTF-8 text
    Text { text: String },

    /// raw bytes (decompressed content that is not valid text)
    Bytes { bytes: Vec<u8> },
}

impl DecodedPayload {
    pub fn text(text: impl Into<String>) -> Self {
        DecodedPayload::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedPayload::Text { text } => Some(text),
            DecodedPayload::Bytes { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DecodedPayload::Text { .. })
    }

    /// Size of the payload as held in memory, in bytes.
    pub fn data_len(&self) -> usize {
        match self {
            DecodedPayload::Text { text } => text.len(),
            DecodedPayload::Bytes { bytes } => bytes.len(),
        }
    }
}

impl From<Inflated> for DecodedPayload {
    fn from(inflated: Inflated) -> Self {
        match inflated {
            Inflated::Text(text) => DecodedPayload::Text { text },
            Inflated::Bytes(bytes) => DecodedPayload::Bytes {
                bytes: bytes.to_vec(),
            },
        }
    }
}
