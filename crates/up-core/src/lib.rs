//! # up-core
//!
//! Core domain models and business logic for urlpaste.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod message;
pub mod paste;
pub mod payload;
pub mod ports;
pub mod token;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, InteropConfig, InteropConstants};
pub use ids::RequestId;
pub use message::{CodecRequest, CodecResponse, HostEvent};
pub use paste::{
    CapturePolicy, DataTransfer, EventTarget, MimeType, PasteAction, PasteDisposition, PasteEvent,
    PastePayload,
};
pub use payload::DecodedPayload;
pub use token::Token;
