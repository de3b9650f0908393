use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DataTransfer;

/// The element a paste event was dispatched on, reduced to what the
/// capture policy needs: its class list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventTarget {
    classes: Vec<String>,
}

impl EventTarget {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Target with no classes at all.
    pub fn unmarked() -> Self {
        Self::default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
}

/// A single paste observed on the platform-wide event stream.
///
/// `data` is the event-scoped clipboard accessor; it is absent on
/// platforms where paste events do not carry their own clipboard data,
/// in which case the legacy fallback accessor is consulted instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasteEvent {
    pub target: EventTarget,
    pub data: Option<DataTransfer>,
    pub observed_at: DateTime<Utc>,
}

impl PasteEvent {
    pub fn new(target: EventTarget, data: Option<DataTransfer>) -> Self {
        Self {
            target,
            data,
            observed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_class() {
        let target = EventTarget::new(["editor", "capture-paste"]);
        assert!(target.has_class("capture-paste"));
        assert!(!target.has_class("capture"));
        assert!(!EventTarget::unmarked().has_class("capture-paste"));
    }
}
