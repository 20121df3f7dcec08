//! Photo-booth providers and keyword-based classification of observed URLs.
//!
//! Each provider is identified by a handful of host/path substrings. The set is
//! fixed at compile time; configuration can only add keywords to a provider.

mod registry;

pub use registry::{ProviderRegistry, RegistryEntry};

use std::fmt;

/// Host that serves PhotoGray originals once the session id is known.
pub const PHOTOGRAY_RESOURCE_HOST: &str = "pg-qr-resource.aprd.io";

/// S3 bucket host Photoism serves finished prints from.
pub const PHOTOISM_S3_HOST: &str = "photoism-cms-prd.s3.ap-northeast-2.amazonaws.com";

/// A known photo-booth provider. Declaration order is registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    PhotoGray,
    Photoism,
    Photosignature,
}

impl Provider {
    /// All providers in registration order.
    pub const ALL: [Provider; 3] = [
        Provider::PhotoGray,
        Provider::Photoism,
        Provider::Photosignature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Provider::PhotoGray => "PhotoGray",
            Provider::Photoism => "Photoism",
            Provider::Photosignature => "Photosignature",
        }
    }

    /// Built-in keywords, matched case-insensitively.
    pub fn builtin_keywords(self) -> &'static [&'static str] {
        match self {
            Provider::PhotoGray => &[PHOTOGRAY_RESOURCE_HOST, "photogray-download.aprd.io"],
            Provider::Photoism => &["qr.seobuk.kr", PHOTOISM_S3_HOST],
            Provider::Photosignature => &["photoqr.kr", "photoqr3.kr"],
        }
    }

    /// Look up a provider by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Provider> {
        Provider::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
