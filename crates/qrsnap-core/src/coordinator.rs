//! Wires the scan gate, resolution sessions, and browser together.
//!
//! One coordinator lives for the whole app. Each new QR payload ends the
//! current session, starts a fresh one, attaches a router to it, and asks the
//! browser to load the payload.

use std::sync::Arc;
use tokio::runtime::Handle;

use crate::browser::{Browser, UiEvent, UiSender};
use crate::config::QrsnapConfig;
use crate::provider::ProviderRegistry;
use crate::router::{spawn_router, SessionHandle, TrafficInlet, TrafficRouter};
use crate::scan::{FrameReceiver, ScanGate, ScanOutcome};
use crate::session::{ResolutionSession, SessionState};

pub struct Coordinator {
    gate: ScanGate,
    registry: Arc<ProviderRegistry>,
    browser: Arc<dyn Browser>,
    ui: UiSender,
    event_buffer: usize,
    runtime: Handle,
    current: Option<SessionHandle>,
}

impl Coordinator {
    /// Router tasks are spawned on `runtime`, so scans may arrive from any thread.
    pub fn new(
        cfg: &QrsnapConfig,
        registry: ProviderRegistry,
        browser: Arc<dyn Browser>,
        ui: UiSender,
        runtime: Handle,
    ) -> Self {
        Self {
            gate: ScanGate::new(),
            registry: Arc::new(registry),
            browser,
            ui,
            event_buffer: cfg.event_buffer,
            runtime,
            current: None,
        }
    }

    /// Offer a decoded payload. A new code opens a session and navigates to it.
    pub fn on_scan(&mut self, payload: &str) -> ScanOutcome {
        let outcome = self.gate.accept(payload);
        if outcome == ScanOutcome::NewCode {
            if let Some(code) = self.gate.take_for_open().map(str::to_string) {
                self.open(code);
            }
        }
        outcome
    }

    fn open(&mut self, url: String) {
        self.end_session();

        let session = Arc::new(ResolutionSession::new(Some(url.clone())));
        let router = Arc::new(TrafficRouter::new(
            Arc::clone(&self.registry),
            session,
            Arc::clone(&self.browser),
            self.ui.clone(),
        ));
        // Attach before navigating so the first requests are not missed.
        self.current = Some(spawn_router(&self.runtime, router, self.event_buffer));

        tracing::info!(url = %url, "opening scanned URL");
        if let Err(err) = self.browser.navigate(&url) {
            tracing::warn!(error = %err, "navigation failed");
            self.ui.post(UiEvent::NavigationFailed(err));
        }
    }

    fn end_session(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.detach();
        }
    }

    /// User went back to the scanner: drop the session and accept any code again.
    pub fn restart_scanning(&mut self) {
        self.end_session();
        self.gate.reset();
    }

    pub fn permission_denied(&self) {
        tracing::warn!("camera permission denied");
        self.ui.post(UiEvent::PermissionDenied);
    }

    /// Channel inlet for the browser's callbacks, while a session is open.
    pub fn inlet(&self) -> Option<TrafficInlet> {
        self.current.as_ref().map(SessionHandle::inlet)
    }

    /// Direct callback target for the browser's callbacks, while a session is open.
    pub fn router(&self) -> Option<Arc<TrafficRouter>> {
        self.current.as_ref().map(|h| Arc::clone(h.router()))
    }

    pub fn session_state(&self) -> Option<SessionState> {
        self.current.as_ref().map(|h| h.router().session().state())
    }

    /// Analyzer loop: feed the latest decoded payload into the gate until the
    /// frame source goes away.
    pub async fn pump_frames(&mut self, frames: &mut FrameReceiver) {
        while let Some(payload) = frames.next().await {
            self.on_scan(&payload);
        }
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.end_session();
    }
}
