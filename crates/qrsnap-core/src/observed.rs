//! Observed traffic and the resolved artifact produced from it.

use std::fmt;

/// Which browsing callback produced an observed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A resource fetch the page attempted (image, script, XHR, ...).
    NetworkRequest,
    /// A native download the page triggered (blob or file link).
    Download,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::NetworkRequest => write!(f, "network-request"),
            Origin::Download => write!(f, "download"),
        }
    }
}

/// A URL seen in the page's traffic, plus the page URL at the time it was seen.
///
/// Some providers hide the real data in the page URL rather than in the event
/// URL (a download event may only carry an opaque `blob:` reference), so the
/// page URL travels with every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedUrl {
    pub url: String,
    pub origin: Origin,
    pub page_url: Option<String>,
}

impl ObservedUrl {
    pub fn network_request(url: impl Into<String>, page_url: Option<String>) -> Self {
        Self {
            url: url.into(),
            origin: Origin::NetworkRequest,
            page_url,
        }
    }

    pub fn download(url: impl Into<String>, page_url: Option<String>) -> Self {
        Self {
            url: url.into(),
            origin: Origin::Download,
            page_url,
        }
    }

    /// Event URL and page URL joined for keyword matching, ASCII-lowercased
    /// like the registry keywords.
    pub fn haystack(&self) -> String {
        let page = self.page_url.as_deref().unwrap_or("");
        format!("{} {}", self.url, page).to_ascii_lowercase()
    }
}

/// Kind of media a resolved URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Video,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Image => write!(f, "image"),
            ResourceKind::Video => write!(f, "video"),
        }
    }
}

/// The final media URL recovered for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub url: String,
    pub kind: ResourceKind,
}

impl ResolvedResource {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: ResourceKind::Image,
        }
    }
}
