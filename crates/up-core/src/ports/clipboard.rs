//! Legacy clipboard accessor port
//!
//! Some platforms do not attach clipboard data to the paste event
//! itself; a process-global accessor holds it instead. The mediator
//! consults this port only when the event carries no data of its own.

use crate::paste::DataTransfer;

pub trait FallbackClipboardPort: Send + Sync {
    /// Snapshot of the globally accessible clipboard data, if any.
    ///
    /// Must be synchronous: extraction completes within the originating
    /// event dispatch. Yielding no data is not an error.
    fn snapshot(&self) -> Option<DataTransfer>;
}
