//! HAR (HTTP Archive) replay: run a captured page load through the resolver.
//!
//! Useful for working out a new provider from a browser capture, or checking
//! that a known capture still resolves, without a live browser.

mod parse;
mod replay;

pub use replay::replay_har;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderRegistry;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn har_file(json: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    fn registry() -> Arc<ProviderRegistry> {
        Arc::new(ProviderRegistry::default())
    }

    #[test]
    fn replay_har_finds_photoism_s3_image() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "pages": [ { "title": "https://qr.seobuk.kr/p/77" } ],
                "entries": [
                    { "request": { "url": "https://qr.seobuk.kr/p/77" }, "response": { "status": 200, "headers": [] } },
                    { "request": { "url": "https://qr.seobuk.kr/static/app.js" }, "response": { "status": 200, "headers": [] } },
                    { "request": { "url": "https://photoism-cms-prd.s3.ap-northeast-2.amazonaws.com/2024/77/print.jpg" }, "response": { "status": 200, "headers": [] } },
                    { "request": { "url": "https://photoism-cms-prd.s3.ap-northeast-2.amazonaws.com/2024/77/frame.png" }, "response": { "status": 200, "headers": [] } }
                ]
            }
        }"#;
        let f = har_file(har);
        let got = replay_har(f.path(), None, registry()).unwrap().unwrap();
        assert_eq!(
            got.url,
            "https://photoism-cms-prd.s3.ap-northeast-2.amazonaws.com/2024/77/print.jpg"
        );
    }

    #[test]
    fn replay_har_attachment_is_a_download() {
        // base64("sessionId=H4R")
        let har = r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    { "request": { "url": "https://photogray-download.aprd.io/?id=c2Vzc2lvbklkPUg0Ug==" }, "response": { "status": 200, "headers": [] } },
                    { "request": { "url": "https://photogray-download.aprd.io/api/file" },
                      "response": { "status": 200, "headers": [ { "name": "content-disposition", "value": "attachment; filename=\"photo.jpg\"" } ] } }
                ]
            }
        }"#;
        let f = har_file(har);
        let got = replay_har(f.path(), None, registry()).unwrap().unwrap();
        assert_eq!(got.url, "https://pg-qr-resource.aprd.io/H4R/image.jpg");
    }

    #[test]
    fn replay_har_explicit_page_url_wins() {
        let har = r#"{
            "log": {
                "version": "1.2",
                "pages": [ { "title": "Photo download" } ],
                "entries": [
                    { "request": { "url": "https://cdn.example.com/blob/1" },
                      "response": { "headers": [ { "name": "Content-Disposition", "value": "attachment" } ] } }
                ]
            }
        }"#;
        let f = har_file(har);
        assert!(replay_har(f.path(), None, registry()).unwrap().is_none());
        let got = replay_har(
            f.path(),
            Some("https://photogray-download.aprd.io/?id=c2Vzc2lvbklkPUg0Ug=="),
            registry(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(got.url, "https://pg-qr-resource.aprd.io/H4R/image.jpg");
    }

    #[test]
    fn replay_har_no_match_is_none() {
        let har = r#"{"log":{"version":"1.2","entries":[
            { "request": { "url": "https://example.com/" }, "response": { "status": 200, "headers": [] } }
        ]}}"#;
        let f = har_file(har);
        assert!(replay_har(f.path(), None, registry()).unwrap().is_none());
    }

    #[test]
    fn replay_har_empty_entries_err() {
        let f = har_file(r#"{"log":{"version":"1.2","entries":[]}}"#);
        assert!(replay_har(f.path(), None, registry()).is_err());
    }

    #[test]
    fn replay_har_invalid_json_err() {
        let f = har_file("{ not json");
        let err = replay_har(f.path(), None, registry()).unwrap_err();
        assert!(format!("{err:#}").contains("parse HAR JSON"));
    }
}
