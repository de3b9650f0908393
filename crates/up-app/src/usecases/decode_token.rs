use std::sync::Arc;

use up_core::payload::DecodedPayload;
use up_core::ports::{CodecError, CompressionPort};
use up_core::token::Token;

/// Use case that reconstitutes content from a transport token.
///
/// ## Responsibility
///
/// Validate the textual token, decompress its bytes, and normalize the
/// result into a single representation.
///
/// The base64 validation is synchronous and happens before the first
/// `await`: known-invalid input never reaches the (potentially
/// expensive) decompression primitive.
///
/// ## Typical Flow
///
/// ```text
/// decode request
///   → Token::parse (sync, may fail with InvalidEncoding)
///   → CompressionPort::decompress (async, may fail)
///   → DecodedPayload normalization
/// ```
#[derive(Clone)]
pub struct DecodeTokenUseCase {
    compressor: Arc<dyn CompressionPort>,
}

impl DecodeTokenUseCase {
    pub fn new(compressor: Arc<dyn CompressionPort>) -> Self {
        Self { compressor }
    }

    pub async fn execute(&self, text: &str) -> Result<(DecodedPayload, Token), CodecError> {
        let (token, compressed) = Token::parse(text)?;

        let inflated = self
            .compressor
            .decompress(compressed)
            .await
            .map_err(|e| CodecError::DecompressionFailed(e.message().to_string()))?;

        log::debug!("decoded token of {} chars", token.as_str().len());
        Ok((inflated.into(), token))
    }
}
