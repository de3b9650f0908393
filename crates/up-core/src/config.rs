//! Application configuration domain model

use serde::{Deserialize, Serialize};

use crate::paste::CapturePolicy;

/// Application configuration consumed at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Which paste events are intercepted.
    pub capture: CapturePolicy,

    /// Interop settings handed to the host on startup.
    pub interop: InteropConfig,
}

/// Interop configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InteropConfig {
    /// Element id the host should focus when it launches.
    pub autofocus_id: String,
}

impl Default for InteropConfig {
    fn default() -> Self {
        Self {
            autofocus_id: "landing-paste-prompt".to_string(),
        }
    }
}

/// Startup values the host needs to cooperate with the mediator,
/// exposed by the builder alongside the channel handles.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InteropConstants {
    pub marker_class: String,
    pub autofocus_id: String,
}

impl AppConfig {
    pub fn capture_policy(&self) -> CapturePolicy {
        self.capture.clone()
    }

    pub fn interop_constants(&self) -> InteropConstants {
        InteropConstants {
            marker_class: self.capture.marker_class.clone(),
            autofocus_id: self.interop.autofocus_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.capture.marker_class, "capture-paste");
        assert!(!config.capture.capture_by_default);
        assert_eq!(config.interop.autofocus_id, "landing-paste-prompt");
    }

    #[test]
    fn test_interop_constants_follow_config() {
        let mut config = AppConfig::default();
        config.capture.marker_class = "editor-paste".to_string();
        let constants = config.interop_constants();
        assert_eq!(constants.marker_class, "editor-paste");
        assert_eq!(constants.autofocus_id, "landing-paste-prompt");
    }
}
