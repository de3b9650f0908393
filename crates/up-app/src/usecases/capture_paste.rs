use std::sync::Arc;

use up_core::paste::{CapturePolicy, PasteDisposition, PasteEvent, PastePayload};
use up_core::ports::FallbackClipboardPort;

/// Use case that decides whether a paste event is captured and, if so,
/// extracts its payload.
///
/// ## Responsibility
///
/// - Apply the [`CapturePolicy`] to the event target
/// - Read clipboard data from the event-scoped accessor, falling back
///   to the legacy accessor only when the event carries none
/// - Extract the `text/html` and `text/plain` representations, each
///   absent when missing or empty
///
/// Capture and payload presence are independent: a captured event with
/// no readable representations still yields a (fully absent) payload.
/// There is no error channel here; missing data is an absent value.
///
/// Entirely synchronous: the decision and extraction complete within
/// the originating event dispatch.
pub struct CapturePasteUseCase {
    policy: CapturePolicy,
    fallback: Arc<dyn FallbackClipboardPort>,
}

impl CapturePasteUseCase {
    pub fn new(policy: CapturePolicy, fallback: Arc<dyn FallbackClipboardPort>) -> Self {
        Self { policy, fallback }
    }

    pub fn policy(&self) -> &CapturePolicy {
        &self.policy
    }

    pub fn execute(&self, event: &PasteEvent) -> PasteDisposition {
        if !self.policy.should_capture(&event.target) {
            return PasteDisposition::PassThrough;
        }

        let data = match &event.data {
            Some(data) => Some(data.clone()),
            None => self.fallback.snapshot(),
        };

        let payload = data
            .as_ref()
            .map(PastePayload::from_transfer)
            .unwrap_or_default();

        PasteDisposition::Captured(payload)
    }
}
