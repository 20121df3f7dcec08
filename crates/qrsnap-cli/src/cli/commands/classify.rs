//! `qrsnap classify <url>` – which provider a URL belongs to.

use qrsnap_core::observed::ObservedUrl;
use qrsnap_core::provider::ProviderRegistry;

pub fn run_classify(registry: &ProviderRegistry, url: &str, page_url: Option<&str>) {
    let observed = ObservedUrl::network_request(url, page_url.map(str::to_string));
    match registry.classify(&observed) {
        Some(provider) => println!("{provider}"),
        None => println!("none"),
    }
}
