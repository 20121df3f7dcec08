//! Replay a HAR capture through a fresh resolution session.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::browser::{ui_channel, MemoryBrowser};
use crate::observed::{ObservedUrl, ResolvedResource};
use crate::provider::ProviderRegistry;
use crate::router::TrafficRouter;
use crate::session::ResolutionSession;

use super::parse::HarLog;

/// Feeds every entry of the HAR file at `path`, in capture order, through one
/// session and returns what that session delivered.
///
/// The page URL is `page_url` if given, else the first page's title when it is
/// a URL, else the first entry's request URL. Entries answered with
/// `Content-Disposition: attachment` are replayed as downloads, the rest as
/// network requests.
pub fn replay_har(
    path: &Path,
    page_url: Option<&str>,
    registry: Arc<ProviderRegistry>,
) -> Result<Option<ResolvedResource>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;

    let entries = har.log.entries;
    if entries.is_empty() {
        anyhow::bail!("HAR file has no entries");
    }

    let page_url = page_url
        .map(str::to_string)
        .or_else(|| {
            har.log
                .pages
                .iter()
                .map(|p| p.title.trim())
                .find(|t| url::Url::parse(t).is_ok())
                .map(str::to_string)
        })
        .unwrap_or_else(|| entries[0].request.url.clone());
    tracing::info!(page_url = %page_url, entries = entries.len(), "replaying HAR");

    let (ui, _ui_rx) = ui_channel();
    let router = TrafficRouter::new(
        registry,
        Arc::new(ResolutionSession::new(None)),
        Arc::new(MemoryBrowser::new()),
        ui,
    );

    let mut delivered = None;
    for entry in &entries {
        let url = entry.request.url.as_str();
        let observed = if entry.is_download() {
            ObservedUrl::download(url, Some(page_url.clone()))
        } else {
            ObservedUrl::network_request(url, Some(page_url.clone()))
        };
        if let Some(resource) = router.observe(observed) {
            delivered = Some(resource);
        }
    }
    Ok(delivered)
}
