//! Assembles the runtime: adapters, channels, and the bridge loop.

use std::sync::Arc;

use tokio::sync::mpsc;

use up_app::{CodecBridge, PasteCaptureMediator};
use up_core::config::{AppConfig, InteropConstants};
use up_core::ports::{CompressionPort, FallbackClipboardPort};
use up_platform::runtime::event_bus::{
    CodecRequestSender, CodecResponseReceiver, HostEventReceiver,
};
use up_platform::{NoFallbackClipboard, XzCompressor};

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Builder for assembling the urlpaste runtime.
///
/// Every port has a default adapter; `with_*` setters inject
/// replacements (test doubles, an alternative primitive, a platform
/// fallback clipboard).
pub struct UrlpasteBuilder {
    config: AppConfig,
    compressor: Option<Arc<dyn CompressionPort>>,
    fallback_clipboard: Option<Arc<dyn FallbackClipboardPort>>,
    channel_capacity: usize,
}

impl UrlpasteBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            compressor: None,
            fallback_clipboard: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    pub fn with_compressor(mut self, compressor: Arc<dyn CompressionPort>) -> Self {
        self.compressor = Some(compressor);
        self
    }

    pub fn with_fallback_clipboard(
        mut self,
        fallback_clipboard: Arc<dyn FallbackClipboardPort>,
    ) -> Self {
        self.fallback_clipboard = Some(fallback_clipboard);
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Wire the channels, spawn the codec bridge loop, and return the
    /// host-side handles.
    ///
    /// Must be called within a tokio runtime.
    pub fn build(self) -> Urlpaste {
        let compressor = self
            .compressor
            .unwrap_or_else(|| Arc::new(XzCompressor::new()));
        let fallback_clipboard = self
            .fallback_clipboard
            .unwrap_or_else(|| Arc::new(NoFallbackClipboard));

        let (request_tx, request_rx) = mpsc::channel(self.channel_capacity);
        let (response_tx, response_rx) = mpsc::channel(self.channel_capacity);
        let (host_event_tx, host_event_rx) = mpsc::channel(self.channel_capacity);

        tokio::spawn(CodecBridge::new(compressor).run(request_rx, response_tx));

        let mediator = PasteCaptureMediator::new(
            self.config.capture_policy(),
            fallback_clipboard,
            host_event_tx,
        );

        let interop = self.config.interop_constants();
        log::info!(
            "urlpaste runtime up (marker class {:?}, capture_by_default {})",
            interop.marker_class,
            self.config.capture.capture_by_default
        );

        Urlpaste {
            requests: request_tx,
            responses: response_rx,
            host_events: host_event_rx,
            mediator,
            interop,
        }
    }
}

impl Urlpaste {
    /// Load configuration from a TOML file (defaults when missing) and
    /// assemble the runtime with the default adapters.
    pub fn from_config_file(path: &std::path::Path) -> anyhow::Result<Urlpaste> {
        use anyhow::Context;
        let config = crate::settings::load_config(path)
            .with_context(|| format!("loading urlpaste configuration from {}", path.display()))?;
        Ok(UrlpasteBuilder::new(config).build())
    }
}

/// Host-side handles of a running urlpaste instance.
pub struct Urlpaste {
    /// Codec requests in.
    pub requests: CodecRequestSender,

    /// Codec responses out; correlate by request id.
    pub responses: CodecResponseReceiver,

    /// Captured paste payloads out.
    pub host_events: HostEventReceiver,

    /// Invoke [`PasteCaptureMediator::on_paste`] from the paste event
    /// dispatch and apply the returned action.
    pub mediator: PasteCaptureMediator,

    /// Startup values for the host (marker class, autofocus target).
    pub interop: InteropConstants,
}
