//! Transport token domain model
//!
//! A [`Token`] is the URL-embeddable textual form of compressed content:
//! base64 text over the compressed bytes of a plaintext payload.

mod codec;

pub use codec::{from_bytes, to_bytes};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::ports::CodecError;

/// A string guaranteed to hold valid base64 transport text.
///
/// A token is only ever constructed by encoding compressed bytes
/// ([`from_bytes`]) or by validating an externally supplied string
/// ([`Token::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(pub(crate) String);

impl Token {
    /// Validate external transport text and return the decoded bytes
    /// alongside the token.
    ///
    /// The validation is synchronous; callers use it to reject malformed
    /// input before any decompression work is scheduled.
    pub fn parse(text: impl Into<String>) -> Result<(Self, Bytes), CodecError> {
        let text = text.into();
        let bytes = codec::to_bytes(&text)?;
        Ok((Token(text), bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Token {
    type Error = CodecError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let (token, _) = Token::parse(text)?;
        Ok(token)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}
