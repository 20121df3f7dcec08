//! `qrsnap resolve <url>` – run one event through classification and its strategy.

use qrsnap_core::observed::ObservedUrl;
use qrsnap_core::provider::ProviderRegistry;
use qrsnap_core::strategy;

pub fn run_resolve(registry: &ProviderRegistry, url: &str, page_url: Option<&str>, download: bool) {
    let page_url = page_url.map(str::to_string);
    let observed = if download {
        ObservedUrl::download(url, page_url)
    } else {
        ObservedUrl::network_request(url, page_url)
    };

    let Some(provider) = registry.classify(&observed) else {
        println!("no match (no provider)");
        return;
    };
    match strategy::try_resolve(provider, &observed) {
        Ok(Some(resource)) => println!("{provider} {} {}", resource.kind, resource.url),
        Ok(None) => println!("no match ({provider})"),
        Err(err) => println!("no match ({provider}: {err})"),
    }
}
