//! Ordered provider registry.

use crate::config::QrsnapConfig;
use crate::observed::ObservedUrl;

use super::Provider;

/// One registry row: a provider and its lowercased keywords.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub provider: Provider,
    pub keywords: Vec<String>,
}

impl RegistryEntry {
    fn builtin(provider: Provider) -> Self {
        Self {
            provider,
            keywords: provider
                .builtin_keywords()
                .iter()
                .map(|k| k.to_ascii_lowercase())
                .collect(),
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

/// Fixed, ordered table used to classify observed URLs.
///
/// Classification is pure: it reads only the entries, which never change after
/// construction, so a registry can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self {
            entries: Provider::ALL.into_iter().map(RegistryEntry::builtin).collect(),
        }
    }
}

impl ProviderRegistry {
    /// Built-in providers plus any extra keywords from `[providers.<name>]` config sections.
    pub fn from_config(cfg: &QrsnapConfig) -> Self {
        let mut registry = Self::default();
        for (name, overrides) in &cfg.providers {
            let Some(provider) = Provider::from_name(name) else {
                tracing::warn!(provider = %name, "ignoring config for unknown provider");
                continue;
            };
            if let Some(entry) = registry.entries.iter_mut().find(|e| e.provider == provider) {
                for kw in &overrides.extra_keywords {
                    let kw = kw.trim().to_ascii_lowercase();
                    if !kw.is_empty() && !entry.keywords.contains(&kw) {
                        entry.keywords.push(kw);
                    }
                }
            }
        }
        registry
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// First provider, in registry order, with a keyword contained in the
    /// event URL or the page URL.
    pub fn classify(&self, observed: &ObservedUrl) -> Option<Provider> {
        let haystack = observed.haystack();
        self.entries
            .iter()
            .find(|e| e.matches(&haystack))
            .map(|e| e.provider)
    }
}
