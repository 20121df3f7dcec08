//! `qrsnap replay-har <path>` – resolve a captured page load.

use anyhow::Result;
use qrsnap_core::har;
use qrsnap_core::provider::ProviderRegistry;
use std::path::Path;
use std::sync::Arc;

pub fn run_replay_har(registry: ProviderRegistry, path: &Path, page_url: Option<&str>) -> Result<()> {
    match har::replay_har(path, page_url, Arc::new(registry))? {
        Some(resource) => println!("{} {}", resource.kind, resource.url),
        None => println!("no match in {}", path.display()),
    }
    Ok(())
}
