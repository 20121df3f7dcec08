//! Traffic event router.
//!
//! Every network request and download the page produces is wrapped as an
//! [`ObservedUrl`], classified, and handed to the matching provider strategy.
//! The first successful resolution in a session is posted to the UI; later
//! matches are dropped. Interception is observational: requests are always
//! allowed through.

mod task;

pub use task::{spawn_router, DownloadRequest, SessionDetached, SessionHandle, TrafficInlet};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::browser::{Browser, UiEvent, UiSender};
use crate::observed::{ObservedUrl, ResolvedResource};
use crate::provider::ProviderRegistry;
use crate::session::{ResolutionSession, SessionState};
use crate::strategy;

/// Answer to the browser's request interceptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptDecision {
    Allow,
}

/// Routing logic without shared state: one event against one session state.
pub fn step(
    registry: &ProviderRegistry,
    state: SessionState,
    observed: &ObservedUrl,
) -> (SessionState, Option<ResolvedResource>) {
    if state == SessionState::Delivered {
        return (state, None);
    }
    let Some(provider) = registry.classify(observed) else {
        return (state, None);
    };
    tracing::trace!(provider = %provider, url = %observed.url, "classified");
    match strategy::resolve(provider, observed) {
        Some(resource) => (SessionState::Delivered, Some(resource)),
        None => (state, None),
    }
}

/// Callback target for one session's traffic. Safe to call from any thread.
pub struct TrafficRouter {
    registry: Arc<ProviderRegistry>,
    session: Arc<ResolutionSession>,
    browser: Arc<dyn Browser>,
    ui: UiSender,
    detached: AtomicBool,
}

impl TrafficRouter {
    pub fn new(
        registry: Arc<ProviderRegistry>,
        session: Arc<ResolutionSession>,
        browser: Arc<dyn Browser>,
        ui: UiSender,
    ) -> Self {
        Self {
            registry,
            session,
            browser,
            ui,
            detached: AtomicBool::new(false),
        }
    }

    pub fn session(&self) -> &ResolutionSession {
        &self.session
    }

    /// Interceptor hook: fired for every resource the page fetches.
    pub fn on_network_request(&self, url: &str) -> InterceptDecision {
        let page_url = self.browser.current_page_url();
        self.observe(ObservedUrl::network_request(url, page_url));
        InterceptDecision::Allow
    }

    /// Download listener hook: fired when the page triggers a native download.
    pub fn on_download_requested(&self, url: &str, mime_type: Option<&str>) {
        tracing::debug!(session = self.session.id(), url, mime_type, "download requested");
        let page_url = self.browser.current_page_url();
        self.observe(ObservedUrl::download(url, page_url));
    }

    /// Route one event. Returns the resource if this call delivered it.
    pub fn observe(&self, observed: ObservedUrl) -> Option<ResolvedResource> {
        if self.detached.load(Ordering::Acquire) {
            tracing::trace!(url = %observed.url, "event after detach ignored");
            return None;
        }
        let session_id = self.session.id();
        tracing::debug!(
            session = session_id,
            origin = %observed.origin,
            url = %observed.url,
            "observed"
        );

        let (_, resolved) = step(&self.registry, self.session.state(), &observed);
        let resource = resolved?;

        if !self.session.try_claim() {
            tracing::debug!(
                session = session_id,
                url = %resource.url,
                "session already delivered; dropping match"
            );
            return None;
        }

        tracing::info!(
            session = session_id,
            origin = %observed.origin,
            kind = %resource.kind,
            url = %resource.url,
            "resolved"
        );
        self.ui.post(UiEvent::Resolved {
            session: session_id,
            resource: resource.clone(),
        });
        Some(resource)
    }

    /// Stop routing; later callbacks are no-ops.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::Release);
    }

    pub fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }
}
