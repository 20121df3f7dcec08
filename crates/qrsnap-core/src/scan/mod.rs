//! QR decode gate: turns a continuous stream of decoded payloads into one
//! "new code" event per distinct payload.

mod latest;

pub use latest::{latest_frame, FrameReceiver, FrameSender};

/// Result of offering a payload to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    NewCode,
    Duplicate,
}

/// Remembers only the last accepted payload; a code seen again after a
/// different one counts as new.
#[derive(Debug, Default)]
pub struct ScanGate {
    last: Option<String>,
    opened: bool,
}

impl ScanGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `payload` against the last accepted one. A new payload becomes
    /// the last accepted value and re-arms [`ScanGate::take_for_open`].
    /// Empty payloads are ignored.
    pub fn accept(&mut self, payload: &str) -> ScanOutcome {
        if payload.is_empty() || self.last.as_deref() == Some(payload) {
            return ScanOutcome::Duplicate;
        }
        tracing::debug!(payload, "new QR payload");
        self.last = Some(payload.to_string());
        self.opened = false;
        ScanOutcome::NewCode
    }

    /// The last accepted payload, returned at most once per accepted code.
    pub fn take_for_open(&mut self) -> Option<&str> {
        if self.opened {
            return None;
        }
        let payload = self.last.as_deref()?;
        self.opened = true;
        Some(payload)
    }

    pub fn last_accepted(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Forget the last payload so the same code can be scanned again.
    pub fn reset(&mut self) {
        self.last = None;
        self.opened = false;
    }
}
