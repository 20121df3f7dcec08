//! Keep-only-latest hand-off between the frame decoder and the single analyzer.
//!
//! Payloads published faster than the analyzer consumes them overwrite each
//! other; the analyzer always sees the most recent one.

use tokio::sync::watch;

pub struct FrameSender(watch::Sender<Option<String>>);

pub struct FrameReceiver(watch::Receiver<Option<String>>);

pub fn latest_frame() -> (FrameSender, FrameReceiver) {
    let (tx, rx) = watch::channel(None);
    (FrameSender(tx), FrameReceiver(rx))
}

impl FrameSender {
    /// Replace whatever payload is pending. Returns false once the analyzer is gone.
    pub fn publish(&self, payload: impl Into<String>) -> bool {
        self.0.send(Some(payload.into())).is_ok()
    }
}

impl FrameReceiver {
    /// Wait for the next published payload; `None` when the sender is dropped.
    pub async fn next(&mut self) -> Option<String> {
        loop {
            self.0.changed().await.ok()?;
            if let Some(p) = self.0.borrow_and_update().clone() {
                return Some(p);
            }
        }
    }
}
