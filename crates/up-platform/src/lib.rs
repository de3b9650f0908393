//! Platform adapters for urlpaste
//!
//! Implementations of the up-core ports: the LZMA compression primitive
//! and the legacy clipboard accessor, plus the channel aliases the
//! composition shell wires together.

pub mod clipboard;
pub mod compression;
pub mod runtime;

pub use clipboard::{NoFallbackClipboard, SharedFallbackClipboard};
pub use compression::XzCompressor;
