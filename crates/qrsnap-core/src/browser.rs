//! Interfaces to the embedded browser and the display side.
//!
//! The browser renders the scanned page and reports its traffic; the display
//! side shows the final image. Neither lives in this crate; they are reached
//! through [`Browser`] and the [`UiSender`] channel.

use std::sync::Mutex;
use tokio::sync::mpsc;

use crate::observed::ResolvedResource;

/// The browser could not load a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load {url}: {reason}")]
pub struct NavigationError {
    pub url: String,
    pub reason: String,
}

/// Embedded browsing session as seen by the pipeline.
pub trait Browser: Send + Sync {
    /// URL of the page currently shown, if any.
    fn current_page_url(&self) -> Option<String>;

    /// Start loading `url`.
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

/// Everything the display side may be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Final media for a session. Sent at most once per session.
    Resolved {
        session: u64,
        resource: ResolvedResource,
    },
    NavigationFailed(NavigationError),
    /// Camera access was refused.
    PermissionDenied,
}

/// Fire-and-forget handle onto the UI loop.
#[derive(Debug, Clone)]
pub struct UiSender(mpsc::UnboundedSender<UiEvent>);

pub fn ui_channel() -> (UiSender, mpsc::UnboundedReceiver<UiEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiSender(tx), rx)
}

impl UiSender {
    pub fn post(&self, event: UiEvent) {
        if self.0.send(event).is_err() {
            tracing::debug!("ui loop closed; dropping event");
        }
    }
}

/// In-memory browser: navigation just records the page URL.
///
/// Used by the headless `drive` command and tests. Only `http`/`https` URLs load.
#[derive(Debug, Default)]
pub struct MemoryBrowser {
    page_url: Mutex<Option<String>>,
}

impl MemoryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an in-page redirect or client-side URL change.
    pub fn set_page_url(&self, url: impl Into<String>) {
        *self.page_url.lock().unwrap_or_else(|e| e.into_inner()) = Some(url.into());
    }
}

impl Browser for MemoryBrowser {
    fn current_page_url(&self) -> Option<String> {
        self.page_url
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        let parsed = url::Url::parse(url).map_err(|e| NavigationError {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(NavigationError {
                url: url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        self.set_page_url(url);
        Ok(())
    }
}
