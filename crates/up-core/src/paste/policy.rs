use serde::{Deserialize, Serialize};

use super::EventTarget;

/// Decides which paste events are intercepted.
///
/// A single marker class plus a default polarity covers both observed
/// behaviors of the system:
///
/// - `capture_by_default = false`: allow-list semantics, capture only
///   when the target bears the marker class.
/// - `capture_by_default = true`: deny-list semantics, capture unless
///   the target bears the marker class.
///
/// Exactly one policy is active at a time; the polarity is
/// configuration, not a code fork.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CapturePolicy {
    pub marker_class: String,
    pub capture_by_default: bool,
}

pub const DEFAULT_MARKER_CLASS: &str = "capture-paste";

impl Default for CapturePolicy {
    fn default() -> Self {
        Self::allow_list(DEFAULT_MARKER_CLASS)
    }
}

impl CapturePolicy {
    /// Capture only targets bearing the marker class.
    pub fn allow_list(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
            capture_by_default: false,
        }
    }

    /// Capture everything except targets bearing the marker class.
    pub fn deny_list(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
            capture_by_default: true,
        }
    }

    pub fn should_capture(&self, target: &EventTarget) -> bool {
        let marked = target.has_class(&self.marker_class);
        let capture = if self.capture_by_default { !marked } else { marked };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            marker = %self.marker_class,
            marked,
            capture,
            "capture policy decision"
        );

        capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_captures_marked_targets_only() {
        let policy = CapturePolicy::allow_list("capture-paste");
        assert!(policy.should_capture(&EventTarget::new(["capture-paste"])));
        assert!(!policy.should_capture(&EventTarget::new(["editor"])));
        assert!(!policy.should_capture(&EventTarget::unmarked()));
    }

    #[test]
    fn test_deny_list_inverts_polarity() {
        let policy = CapturePolicy::deny_list("capture-paste");
        assert!(!policy.should_capture(&EventTarget::new(["capture-paste"])));
        assert!(policy.should_capture(&EventTarget::new(["editor"])));
        assert!(policy.should_capture(&EventTarget::unmarked()));
    }
}
