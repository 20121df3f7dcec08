//! Resolution session: one scanned-URL browsing visit, delivering at most one result.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// `AwaitingResolution` → `Delivered`, once. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingResolution,
    Delivered,
}

/// Shared delivered flag for one browsing episode.
///
/// Callbacks from any thread may race to deliver; [`ResolutionSession::try_claim`]
/// lets exactly one of them through.
#[derive(Debug)]
pub struct ResolutionSession {
    id: u64,
    scan_payload: Option<String>,
    delivered: AtomicBool,
}

impl ResolutionSession {
    pub fn new(scan_payload: Option<String>) -> Self {
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(session = id, payload = ?scan_payload, "session started");
        Self {
            id,
            scan_payload,
            delivered: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The QR payload that opened this session, if it came from a scan.
    pub fn scan_payload(&self) -> Option<&str> {
        self.scan_payload.as_deref()
    }

    pub fn state(&self) -> SessionState {
        if self.delivered.load(Ordering::Acquire) {
            SessionState::Delivered
        } else {
            SessionState::AwaitingResolution
        }
    }

    /// Flip to `Delivered`. True only for the first caller.
    pub fn try_claim(&self) -> bool {
        self.delivered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
