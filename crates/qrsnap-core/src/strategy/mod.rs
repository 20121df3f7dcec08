//! Per-provider decode strategies.
//!
//! A strategy turns one observed URL into the real media URL, or reports that
//! this event is not the one it is waiting for. Strategies are pure: they never
//! touch session state, and decode failures stay inside this module.

mod photogray;
mod photoism;
mod photosignature;

use crate::observed::{ObservedUrl, ResolvedResource};
use crate::provider::Provider;

/// Malformed encoded data inside a URL that a provider matched.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid page URL {url:?}: {source}")]
    PageUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid base64 in id parameter: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Runs the provider's strategy, exposing decode failures.
///
/// `Ok(None)` means the event does not carry this provider's media.
pub fn try_resolve(
    provider: Provider,
    observed: &ObservedUrl,
) -> Result<Option<ResolvedResource>, DecodeError> {
    match provider {
        Provider::PhotoGray => photogray::resolve(observed),
        Provider::Photoism => Ok(photoism::resolve(observed)),
        Provider::Photosignature => Ok(photosignature::resolve(observed)),
    }
}

/// Runs the provider's strategy; a decode failure is logged and treated as no match.
pub fn resolve(provider: Provider, observed: &ObservedUrl) -> Option<ResolvedResource> {
    match try_resolve(provider, observed) {
        Ok(resolved) => resolved,
        Err(err) => {
            tracing::warn!(
                provider = %provider,
                url = %observed.url,
                error = %err,
                "decode failed; ignoring event"
            );
            None
        }
    }
}
