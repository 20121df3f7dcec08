//! `qrsnap providers` – list the registry in match order.

use qrsnap_core::provider::ProviderRegistry;

pub fn run_providers(registry: &ProviderRegistry) {
    println!("{:<3} {:<16} {}", "#", "PROVIDER", "KEYWORDS");
    for (i, entry) in registry.entries().iter().enumerate() {
        println!(
            "{:<3} {:<16} {}",
            i + 1,
            entry.provider.name(),
            entry.keywords.join(", ")
        );
    }
}
