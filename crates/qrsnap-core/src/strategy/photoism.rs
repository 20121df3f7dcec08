//! Photoism: the finished print is fetched straight from S3, so the intercepted
//! request URL is already the answer.

use crate::observed::{ObservedUrl, Origin, ResolvedResource};
use crate::provider::PHOTOISM_S3_HOST;

const IMAGE_SUFFIXES: [&str; 2] = [".jpg", ".png"];

pub(super) fn resolve(observed: &ObservedUrl) -> Option<ResolvedResource> {
    if observed.origin != Origin::NetworkRequest {
        return None;
    }
    let parsed = url::Url::parse(&observed.url).ok()?;
    if !parsed
        .host_str()
        .is_some_and(|h| h.eq_ignore_ascii_case(PHOTOISM_S3_HOST))
    {
        return None;
    }
    let path = parsed.path().to_ascii_lowercase();
    IMAGE_SUFFIXES
        .iter()
        .any(|s| path.ends_with(s))
        .then(|| ResolvedResource::image(observed.url.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const S3: &str = "https://photoism-cms-prd.s3.ap-northeast-2.amazonaws.com";

    fn net(url: &str) -> ObservedUrl {
        ObservedUrl::network_request(url, Some("https://qr.seobuk.kr/abc".to_string()))
    }

    #[test]
    fn s3_image_is_passed_through_unchanged() {
        let url = format!("{S3}/x/y.jpg");
        assert_eq!(resolve(&net(&url)), Some(ResolvedResource::image(url.clone())));
        let png = format!("{S3}/2024/frame.PNG");
        assert_eq!(resolve(&net(&png)).map(|r| r.url), Some(png));
    }

    #[test]
    fn non_image_on_s3_is_ignored() {
        assert_eq!(resolve(&net(&format!("{S3}/x/clip.mp4"))), None);
        assert_eq!(resolve(&net(&format!("{S3}/x/"))), None);
    }

    #[test]
    fn other_hosts_are_ignored() {
        assert_eq!(resolve(&net("https://qr.seobuk.kr/static/logo.png")), None);
        assert_eq!(
            resolve(&net("https://evil.example/photoism-cms-prd.s3.ap-northeast-2.amazonaws.com/a.jpg")),
            None
        );
    }

    #[test]
    fn downloads_are_ignored() {
        let obs = ObservedUrl::download(format!("{S3}/x/y.jpg"), None);
        assert_eq!(resolve(&obs), None);
    }
}
