//! Paste capture domain model
//!
//! Represents a clipboard paste observed at the host boundary: the event
//! target, the clipboard data attached to the event, and the payload
//! extracted from it.

mod event;
mod policy;

pub use event::{EventTarget, PasteEvent};
pub use policy::CapturePolicy;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn text_plain() -> Self {
        Self("text/plain".into())
    }
    pub fn text_html() -> Self {
        Self("text/html".into())
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}

/// Clipboard data attached to a paste event, keyed by MIME type.
///
/// Mirrors the accessor shape of the platform clipboard: a lookup that
/// yields one textual representation per MIME type. An empty string is
/// indistinguishable from "no data" at the platform boundary and is
/// reported as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataTransfer {
    #[serde(default)]
    entries: BTreeMap<MimeType, String>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mime: MimeType, data: impl Into<String>) {
        self.entries.insert(mime, data.into());
    }

    /// Builder-style insert, convenient when assembling events.
    pub fn with(mut self, mime: MimeType, data: impl Into<String>) -> Self {
        self.insert(mime, data);
        self
    }

    /// Look up the representation for a MIME type.
    ///
    /// Empty representations are coerced to absent.
    pub fn get_data(&self, mime: &MimeType) -> Option<&str> {
        self.entries.get(mime).map(String::as_str).filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Payload extracted from a single captured paste.
///
/// Both fields are independently optional: a clipboard item may supply
/// only one representation, or none at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PastePayload {
    pub html: Option<String>,
    pub plain_text: Option<String>,
}

impl PastePayload {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_transfer(data: &DataTransfer) -> Self {
        Self {
            html: data.get_data(&MimeType::text_html()).map(str::to_owned),
            plain_text: data.get_data(&MimeType::text_plain()).map(str::to_owned),
        }
    }
}

/// Outcome of running a paste event through the capture policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteDisposition {
    /// The event was captured; the extracted payload is forwarded to the
    /// host, which takes ownership of inserting the content.
    Captured(PastePayload),

    /// The event is left for default browser handling; nothing is sent.
    PassThrough,
}

/// What the dispatching layer must do with the platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteAction {
    SuppressDefault,
    PassThrough,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_coerces_empty_to_absent() {
        let data = DataTransfer::new().with(MimeType::text_plain(), "");
        assert_eq!(data.get_data(&MimeType::text_plain()), None);
    }

    #[test]
    fn test_payload_from_plain_only() {
        let data = DataTransfer::new().with(MimeType::text_plain(), "hello");
        let payload = PastePayload::from_transfer(&data);
        assert_eq!(payload.plain_text.as_deref(), Some("hello"));
        assert_eq!(payload.html, None);
    }

    #[test]
    fn test_payload_from_html_only() {
        let data = DataTransfer::new().with(MimeType::text_html(), "<b>hi</b>");
        let payload = PastePayload::from_transfer(&data);
        assert_eq!(payload.html.as_deref(), Some("<b>hi</b>"));
        assert_eq!(payload.plain_text, None);
    }

    #[test]
    fn test_payload_from_empty_transfer() {
        let payload = PastePayload::from_transfer(&DataTransfer::new());
        assert_eq!(payload, PastePayload::empty());
    }
}
