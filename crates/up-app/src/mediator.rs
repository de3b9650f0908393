//! Paste-capture mediator
//!
//! Sits on the platform-wide paste event stream. The embedding layer
//! invokes [`PasteCaptureMediator::on_paste`] synchronously for every
//! paste dispatched anywhere in the document and applies the returned
//! action (suppress default handling or leave the event untouched).

use std::sync::Arc;

use tokio::sync::mpsc;

use up_core::message::HostEvent;
use up_core::paste::{CapturePolicy, PasteAction, PasteDisposition, PasteEvent};
use up_core::ports::FallbackClipboardPort;

use crate::usecases::CapturePasteUseCase;

pub struct PasteCaptureMediator {
    capture: CapturePasteUseCase,
    host_events: mpsc::Sender<HostEvent>,
}

impl PasteCaptureMediator {
    pub fn new(
        policy: CapturePolicy,
        fallback: Arc<dyn FallbackClipboardPort>,
        host_events: mpsc::Sender<HostEvent>,
    ) -> Self {
        Self {
            capture: CapturePasteUseCase::new(policy, fallback),
            host_events,
        }
    }

    /// Handle one paste event within its dispatch.
    ///
    /// When the event is captured, the extracted payload is forwarded to
    /// the host and the caller must suppress the default paste handling;
    /// otherwise the event passes through untouched and no message is
    /// sent.
    pub fn on_paste(&self, event: &PasteEvent) -> PasteAction {
        match self.capture.execute(event) {
            PasteDisposition::Captured(payload) => {
                if let Err(e) = self.host_events.try_send(HostEvent::PasteCaptured(payload)) {
                    log::warn!("failed to forward captured paste: {}", e);
                }
                PasteAction::SuppressDefault
            }
            PasteDisposition::PassThrough => PasteAction::PassThrough,
        }
    }
}
