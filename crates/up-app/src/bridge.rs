//! Codec bridge runtime
//!
//! Consumes [`CodecRequest`]s from the host, runs the decode/encode use
//! cases, and answers over the response channel. Every request is
//! independent and stateless; a request runs to completion or failure,
//! and its response echoes the request id.

use std::sync::Arc;

use tokio::sync::mpsc;

use up_core::message::{CodecRequest, CodecResponse};
use up_core::payload::DecodedPayload;
use up_core::ports::CompressionPort;

use crate::usecases::{DecodeTokenUseCase, EncodeTextUseCase};

#[derive(Clone)]
pub struct CodecBridge {
    decode: DecodeTokenUseCase,
    encode: EncodeTextUseCase,
}

impl CodecBridge {
    pub fn new(compressor: Arc<dyn CompressionPort>) -> Self {
        Self {
            decode: DecodeTokenUseCase::new(compressor.clone()),
            encode: EncodeTextUseCase::new(compressor),
        }
    }

    /// Handle a single request to completion.
    pub async fn handle(&self, request: CodecRequest) -> CodecResponse {
        match request {
            CodecRequest::Decode { id, token } => match self.decode.execute(&token).await {
                Ok((plaintext, token)) => CodecResponse::success(id, plaintext, token),
                Err(e) => CodecResponse::failure(id, &e),
            },
            CodecRequest::Encode { id, plaintext } => match self.encode.execute(plaintext).await {
                Ok((plaintext, token)) => {
                    CodecResponse::success(id, DecodedPayload::text(plaintext), token)
                }
                Err(e) => CodecResponse::failure(id, &e),
            },
        }
    }

    /// Drive the request channel until the host drops its sender.
    ///
    /// Requests are dispatched as they arrive and may complete out of
    /// order; callers correlate responses by request id.
    pub async fn run(
        self,
        mut requests: mpsc::Receiver<CodecRequest>,
        responses: mpsc::Sender<CodecResponse>,
    ) {
        while let Some(request) = requests.recv().await {
            tracing::debug!(id = %request.id(), "dispatching codec request");
            let bridge = self.clone();
            let responses = responses.clone();
            tokio::spawn(async move {
                let response = bridge.handle(request).await;
                if responses.send(response).await.is_err() {
                    log::warn!("response channel closed, dropping codec response");
                }
            });
        }
        log::debug!("request channel closed, codec bridge stopping");
    }
}
