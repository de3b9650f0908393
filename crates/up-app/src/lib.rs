//! urlpaste application orchestration layer
//!
//! Use cases for the codec bridge and the paste-capture mediator, plus
//! the runtime loops that connect them to the host channels.

pub mod bridge;
pub mod mediator;
pub mod usecases;

pub use bridge::CodecBridge;
pub use mediator::PasteCaptureMediator;
