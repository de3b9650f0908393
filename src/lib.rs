//! # urlpaste
//!
//! Turns pasted content into compact, URL-embeddable tokens and back,
//! and intercepts paste events on behalf of a host application.
//!
//! The host talks to the system over message channels:
//!
//! - codec requests in, codec responses out (decode/encode with a
//!   correlation id on every message)
//! - captured paste payloads pushed on a separate host-event channel
//!
//! [`UrlpasteBuilder`] assembles the adapters, spawns the codec bridge
//! loop, and hands back the channel endpoints plus the paste mediator
//! and the interop constants the host needs at startup.
//!
//! ```no_run
//! use urlpaste::{UrlpasteBuilder, CodecRequest};
//!
//! # async fn demo() {
//! let mut app = UrlpasteBuilder::new(Default::default()).build();
//! app.requests.send(CodecRequest::encode("hello")).await.ok();
//! let response = app.responses.recv().await;
//! # }
//! ```

pub mod bootstrap;
pub mod builder;
pub mod settings;

pub use builder::{Urlpaste, UrlpasteBuilder};
pub use settings::{load_config, ConfigError};

pub use up_app::{CodecBridge, PasteCaptureMediator};
pub use up_core::ports::{CodecError, CodecErrorKind};
pub use up_core::token;
pub use up_core::{
    AppConfig, CapturePolicy, CodecRequest, CodecResponse, DataTransfer, DecodedPayload,
    EventTarget, HostEvent, InteropConstants, MimeType, PasteAction, PasteEvent, PastePayload,
    RequestId, Token,
};
pub use up_platform::{NoFallbackClipboard, SharedFallbackClipboard, XzCompressor};
