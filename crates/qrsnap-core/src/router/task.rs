//! Channel-fed router task.
//!
//! The browser pushes network requests and downloads into two independent
//! channels; one task drains both in whatever order they arrive. Detaching a
//! session closes the channels, so the browser sees its sends fail instead of
//! feeding a discarded session.

use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{InterceptDecision, TrafficRouter};

/// A native download the page triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub mime_type: Option<String>,
}

/// The session behind a [`TrafficInlet`] has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDetached;

impl fmt::Display for SessionDetached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resolution session detached")
    }
}

impl std::error::Error for SessionDetached {}

/// Browser-side ends of the two inbound channels.
#[derive(Debug, Clone)]
pub struct TrafficInlet {
    requests: mpsc::Sender<String>,
    downloads: mpsc::Sender<DownloadRequest>,
}

impl TrafficInlet {
    /// Report a network request. The request itself is always allowed.
    pub async fn network_request(
        &self,
        url: impl Into<String>,
    ) -> Result<InterceptDecision, SessionDetached> {
        self.requests
            .send(url.into())
            .await
            .map_err(|_| SessionDetached)?;
        Ok(InterceptDecision::Allow)
    }

    /// Non-blocking variant for interceptors running on the browser's own threads.
    /// A full channel drops the event (logged) and still allows the request.
    pub fn try_network_request(
        &self,
        url: impl Into<String>,
    ) -> Result<InterceptDecision, SessionDetached> {
        match self.requests.try_send(url.into()) {
            Ok(()) => Ok(InterceptDecision::Allow),
            Err(mpsc::error::TrySendError::Full(url)) => {
                tracing::warn!(url = %url, "traffic channel full; dropping request event");
                Ok(InterceptDecision::Allow)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(SessionDetached),
        }
    }

    pub async fn download_requested(
        &self,
        url: impl Into<String>,
        mime_type: Option<String>,
    ) -> Result<(), SessionDetached> {
        self.downloads
            .send(DownloadRequest {
                url: url.into(),
                mime_type,
            })
            .await
            .map_err(|_| SessionDetached)
    }

    pub fn is_detached(&self) -> bool {
        self.requests.is_closed() || self.downloads.is_closed()
    }
}

/// A running session: the router, its task, and the inlet handed to the browser.
pub struct SessionHandle {
    router: Arc<TrafficRouter>,
    inlet: TrafficInlet,
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub fn router(&self) -> &Arc<TrafficRouter> {
        &self.router
    }

    pub fn inlet(&self) -> TrafficInlet {
        self.inlet.clone()
    }

    /// End the session: stop the task and close both channels.
    pub fn detach(self) {
        tracing::debug!(session = self.router.session().id(), "detaching session");
        self.router.detach();
        self.task.abort();
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the task draining both channels into `router` on `runtime`.
/// Callable from any thread, runtime or not.
pub fn spawn_router(runtime: &Handle, router: Arc<TrafficRouter>, buffer: usize) -> SessionHandle {
    let buffer = buffer.max(1);
    let (req_tx, mut req_rx) = mpsc::channel::<String>(buffer);
    let (dl_tx, mut dl_rx) = mpsc::channel::<DownloadRequest>(buffer);

    let worker = Arc::clone(&router);
    let task = runtime.spawn(async move {
        loop {
            tokio::select! {
                Some(url) = req_rx.recv() => {
                    worker.on_network_request(&url);
                }
                Some(dl) = dl_rx.recv() => {
                    worker.on_download_requested(&dl.url, dl.mime_type.as_deref());
                }
                else => break,
            }
        }
        tracing::debug!(session = worker.session().id(), "router task finished");
    });

    SessionHandle {
        router,
        inlet: TrafficInlet {
            requests: req_tx,
            downloads: dl_tx,
        },
        task,
    }
}
