//! Legacy clipboard accessor adapters
//!
//! Stand-ins for the process-global clipboard some platforms expose
//! instead of event-scoped data. The embedding layer populates
//! [`SharedFallbackClipboard`] when its platform has such an accessor;
//! hosts without one wire [`NoFallbackClipboard`].

use std::sync::RwLock;

use up_core::paste::DataTransfer;
use up_core::ports::FallbackClipboardPort;

/// In-memory fallback clipboard shared with the embedding layer.
#[derive(Debug, Default)]
pub struct SharedFallbackClipboard {
    data: RwLock<Option<DataTransfer>>,
}

impl SharedFallbackClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, data: DataTransfer) {
        if let Ok(mut slot) = self.data.write() {
            *slot = Some(data);
        } else {
            log::warn!("fallback clipboard lock poisoned, dropping update");
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.data.write() {
            *slot = None;
        }
    }
}

impl FallbackClipboardPort for SharedFallbackClipboard {
    fn snapshot(&self) -> Option<DataTransfer> {
        self.data.read().ok().and_then(|slot| slot.clone())
    }
}

/// Fallback accessor for platforms that have none.
#[derive(Debug, Default)]
pub struct NoFallbackClipboard;

impl FallbackClipboardPort for NoFallbackClipboard {
    fn snapshot(&self) -> Option<DataTransfer> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use up_core::paste::MimeType;

    #[test]
    fn test_shared_clipboard_snapshot() {
        let clipboard = SharedFallbackClipboard::new();
        assert_eq!(clipboard.snapshot(), None);

        clipboard.set(DataTransfer::new().with(MimeType::text_plain(), "legacy"));
        let snapshot = clipboard.snapshot().unwrap();
        assert_eq!(snapshot.get_data(&MimeType::text_plain()), Some("legacy"));

        clipboard.clear();
        assert_eq!(clipboard.snapshot(), None);
    }

    #[test]
    fn test_no_fallback_yields_nothing() {
        assert_eq!(NoFallbackClipboard.snapshot(), None);
    }
}
