//! Host-boundary messages
//!
//! The host application talks to the codec bridge and the paste-capture
//! mediator over message channels. These types are the channel payloads;
//! they serialize with snake_case tags since the host port is a JSON
//! boundary.

use serde::{Deserialize, Serialize};

use crate::ids::RequestId;
use crate::paste::PastePayload;
use crate::payload::DecodedPayload;
use crate::ports::{CodecError, CodecErrorKind};
use crate::token::Token;

/// Request issued by the host to the codec bridge.
///
/// `Decode` carries raw text rather than a [`Token`]: the bridge owns
/// the validation that turns external input into a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CodecRequest {
    Decode { id: RequestId, token: String },
    Encode { id: RequestId, plaintext: String },
}

impl CodecRequest {
    pub fn decode(token: impl Into<String>) -> Self {
        CodecRequest::Decode {
            id: RequestId::new(),
            token: token.into(),
        }
    }

    pub fn encode(plaintext: impl Into<String>) -> Self {
        CodecRequest::Encode {
            id: RequestId::new(),
            plaintext: plaintext.into(),
        }
    }

    pub fn id(&self) -> &RequestId {
        match self {
            CodecRequest::Decode { id, .. } => id,
            CodecRequest::Encode { id, .. } => id,
        }
    }
}

/// Response emitted by the codec bridge.
///
/// A success always carries both sides of the round trip so the caller
/// can correlate the response with its originating value; the request
/// id removes the ambiguity between concurrent in-flight requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CodecResponse {
    Success {
        id: RequestId,
        plaintext: DecodedPayload,
        token: Token,
    },
    Failure {
        id: RequestId,
        kind: CodecErrorKind,
        message: String,
    },
}

impl CodecResponse {
    pub fn success(id: RequestId, plaintext: DecodedPayload, token: Token) -> Self {
        CodecResponse::Success {
            id,
            plaintext,
            token,
        }
    }

    pub fn failure(id: RequestId, error: &CodecError) -> Self {
        CodecResponse::Failure {
            id,
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn id(&self) -> &RequestId {
        match self {
            CodecResponse::Success { id, .. } => id,
            CodecResponse::Failure { id, .. } => id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CodecResponse::Success { .. })
    }
}

/// Message pushed to the host outside the request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    PasteCaptured(PastePayload),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token;

    #[test]
    fn test_success_shape_on_the_wire() {
        let token = token::from_bytes(&[1, 2, 3]);
        let response = CodecResponse::success(
            RequestId::from("r-1".to_string()),
            DecodedPayload::text("hi"),
            token,
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["plaintext"]["kind"], "text");
        assert_eq!(json["plaintext"]["text"], "hi");
        assert_eq!(json["token"], "AQID");
    }

    #[test]
    fn test_failure_shape_on_the_wire() {
        let response = CodecResponse::failure(
            RequestId::from("r-2".to_string()),
            &CodecError::InvalidEncoding,
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["kind"], "invalid_encoding");
        assert_eq!(json["message"], "invalid base64 encoding");
    }

    #[test]
    fn test_paste_captured_shape_on_the_wire() {
        let event = HostEvent::PasteCaptured(PastePayload {
            html: None,
            plain_text: Some("hello".into()),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "paste_captured");
        assert_eq!(json["plain_text"], "hello");
        assert_eq!(json["html"], serde_json::Value::Null);
    }
}
