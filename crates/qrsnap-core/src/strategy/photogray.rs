//! PhotoGray: session id hidden in a base64 `id` query parameter of the page URL.
//!
//! The download event itself only carries a blob reference; the page URL looks
//! like `https://photogray-download.aprd.io/?id=<base64("sessionId=...&...")>`.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::observed::{ObservedUrl, Origin, ResolvedResource};
use crate::provider::PHOTOGRAY_RESOURCE_HOST;

use super::DecodeError;

/// Standard alphabet; trailing `=` may be present or stripped.
const ID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(super) fn resolve(observed: &ObservedUrl) -> Result<Option<ResolvedResource>, DecodeError> {
    if observed.origin != Origin::Download {
        return Ok(None);
    }
    let Some(page_url) = observed.page_url.as_deref() else {
        return Ok(None);
    };
    let page = url::Url::parse(page_url).map_err(|source| DecodeError::PageUrl {
        url: page_url.to_string(),
        source,
    })?;

    let Some(encoded) = query_param(page.query().unwrap_or(""), "id") else {
        tracing::debug!(page_url, "PhotoGray page has no id parameter");
        return Ok(None);
    };

    // Form decoding turns '+' into ' '; the value is base64, so put them back.
    let encoded = encoded.trim().replace(' ', "+");
    let bytes = ID_ENGINE.decode(encoded.as_bytes())?;
    let decoded = String::from_utf8_lossy(&bytes);
    tracing::debug!(decoded = %decoded, "PhotoGray decoded id");

    match query_param(decoded.trim_start_matches('?'), "sessionId") {
        Some(session_id) if !session_id.is_empty() => Ok(Some(ResolvedResource::image(format!(
            "https://{PHOTOGRAY_RESOURCE_HOST}/{session_id}/image.jpg"
        )))),
        _ => {
            tracing::debug!(decoded = %decoded, "PhotoGray id has no sessionId");
            Ok(None)
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observed::ResourceKind;
    use base64::engine::general_purpose::STANDARD;

    fn page_with_id(id: &str) -> ObservedUrl {
        ObservedUrl::download(
            "blob:https://photogray-download.aprd.io/5d0c",
            Some(format!("https://photogray-download.aprd.io/?id={id}")),
        )
    }

    #[test]
    fn decodes_session_id_from_page_url() {
        let id = STANDARD.encode("sessionId=XYZ789");
        let got = resolve(&page_with_id(&id)).unwrap().unwrap();
        assert_eq!(got.url, "https://pg-qr-resource.aprd.io/XYZ789/image.jpg");
        assert_eq!(got.kind, ResourceKind::Image);
    }

    #[test]
    fn unpadded_id_is_accepted() {
        let id = STANDARD.encode("sessionId=ABC");
        assert!(id.ends_with("=="));
        let got = resolve(&page_with_id(id.trim_end_matches('='))).unwrap().unwrap();
        assert_eq!(got.url, "https://pg-qr-resource.aprd.io/ABC/image.jpg");
    }

    #[test]
    fn session_id_among_other_params() {
        let id = STANDARD.encode("mode=print&sessionId=a1b2c3&lang=ko");
        let got = resolve(&page_with_id(&id)).unwrap().unwrap();
        assert_eq!(got.url, "https://pg-qr-resource.aprd.io/a1b2c3/image.jpg");
    }

    #[test]
    fn plus_signs_survive_form_decoding() {
        // "sessionId=>>>" encodes to a value containing '+'.
        let id = STANDARD.encode("sessionId=>>>?");
        assert!(id.contains('+'));
        let got = resolve(&page_with_id(&id)).unwrap().unwrap();
        assert_eq!(got.url, "https://pg-qr-resource.aprd.io/>>>?/image.jpg");
    }

    #[test]
    fn missing_id_is_no_match() {
        let obs = ObservedUrl::download(
            "blob:x",
            Some("https://photogray-download.aprd.io/?other=1".to_string()),
        );
        assert_eq!(resolve(&obs).unwrap(), None);
    }

    #[test]
    fn missing_session_id_is_no_match() {
        let id = STANDARD.encode("user=42");
        assert_eq!(resolve(&page_with_id(&id)).unwrap(), None);
        let empty = STANDARD.encode("sessionId=");
        assert_eq!(resolve(&page_with_id(&empty)).unwrap(), None);
    }

    #[test]
    fn invalid_base64_is_decode_error() {
        let err = resolve(&page_with_id("%%%%")).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn network_requests_are_ignored() {
        let id = STANDARD.encode("sessionId=XYZ789");
        let obs = ObservedUrl::network_request(
            "https://photogray-download.aprd.io/app.js",
            Some(format!("https://photogray-download.aprd.io/?id={id}")),
        );
        assert_eq!(resolve(&obs).unwrap(), None);
    }

    #[test]
    fn missing_page_url_is_no_match() {
        let obs = ObservedUrl::download("blob:https://photogray-download.aprd.io/1", None);
        assert_eq!(resolve(&obs).unwrap(), None);
    }
}
