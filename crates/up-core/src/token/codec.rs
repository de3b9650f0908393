//! Byte-array codec: base64 transport text to raw bytes and back.
//!
//! Standard alphabet with padding, no line wrapping. Decoding is the
//! only fallible direction; encoding is total.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;

use super::Token;
use crate::ports::CodecError;

/// Decode base64 transport text into a byte sequence.
///
/// Synchronous; fails with [`CodecError::InvalidEncoding`] when the
/// input is not valid base64.
pub fn to_bytes(text: &str) -> Result<Bytes, CodecError> {
    STANDARD
        .decode(text)
        .map(Bytes::from)
        .map_err(|_| CodecError::InvalidEncoding)
}

/// Encode a byte sequence into a transport token.
pub fn from_bytes(bytes: &[u8]) -> Token {
    Token(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let data = [0u8, 1, 2, 250, 251, 252, 253, 254, 255];
        let token = from_bytes(&data);
        assert_eq!(to_bytes(token.as_str()).unwrap().as_ref(), &data);
    }

    #[test]
    fn test_empty_input() {
        let token = from_bytes(&[]);
        assert_eq!(token.as_str(), "");
        assert!(to_bytes("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_text_fails() {
        assert_eq!(to_bytes("not-valid-base64!!"), Err(CodecError::InvalidEncoding));
        assert_eq!(to_bytes("AAA\u{e9}"), Err(CodecError::InvalidEncoding));
    }

    #[test]
    fn test_no_line_wrapping() {
        let token = from_bytes(&vec![0xABu8; 8192]);
        assert!(!token.as_str().contains('\n'));
        assert!(!token.as_str().contains('\r'));
    }
}
