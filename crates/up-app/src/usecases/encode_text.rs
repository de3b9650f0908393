use std::sync::Arc;

use bytes::Bytes;
use up_core::ports::{CodecError, CompressionLevel, CompressionPort};
use up_core::token::{self, Token};

/// Use case that turns plaintext into a transport token.
///
/// Compression runs at the maximum supported strength, a fixed
/// size-over-speed trade-off for URL-embeddable output. Unlike decode,
/// encoding has no synchronous-validation failure mode: any text can be
/// compressed.
#[derive(Clone)]
pub struct EncodeTextUseCase {
    compressor: Arc<dyn CompressionPort>,
}

impl EncodeTextUseCase {
    pub fn new(compressor: Arc<dyn CompressionPort>) -> Self {
        Self { compressor }
    }

    pub async fn execute(&self, plaintext: String) -> Result<(String, Token), CodecError> {
        let raw = Bytes::from(plaintext.clone().into_bytes());

        let compressed = self
            .compressor
            .compress(raw, CompressionLevel::MAX)
            .await
            .map_err(|e| CodecError::CompressionFailed(e.message().to_string()))?;

        let token = token::from_bytes(&compressed);
        log::debug!(
            "encoded {} bytes of plaintext into token of {} chars",
            plaintext.len(),
            token.as_str().len()
        );
        Ok((plaintext, token))
    }
}
