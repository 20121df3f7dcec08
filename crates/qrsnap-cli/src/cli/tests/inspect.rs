//! Tests for providers, classify, resolve, replay-har.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_providers() {
    match parse(&["qrsnap", "providers"]) {
        CliCommand::Providers => {}
        _ => panic!("expected Providers"),
    }
}

#[test]
fn cli_parse_classify_with_page_url() {
    match parse(&[
        "qrsnap",
        "classify",
        "blob:https://x/1",
        "--page-url",
        "https://photogray-download.aprd.io/?id=abc",
    ]) {
        CliCommand::Classify { url, page_url } => {
            assert_eq!(url, "blob:https://x/1");
            assert_eq!(
                page_url.as_deref(),
                Some("https://photogray-download.aprd.io/?id=abc")
            );
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_resolve_defaults_to_network_request() {
    match parse(&["qrsnap", "resolve", "https://photoqr.kr/R/a/o.png"]) {
        CliCommand::Resolve {
            url,
            page_url,
            download,
        } => {
            assert_eq!(url, "https://photoqr.kr/R/a/o.png");
            assert!(page_url.is_none());
            assert!(!download);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_download() {
    match parse(&["qrsnap", "resolve", "blob:x", "--download"]) {
        CliCommand::Resolve { download, .. } => assert!(download),
        _ => panic!("expected Resolve with --download"),
    }
}

#[test]
fn cli_parse_replay_har() {
    match parse(&["qrsnap", "replay-har", "/tmp/capture.har"]) {
        CliCommand::ReplayHar { path, page_url } => {
            assert_eq!(path, std::path::Path::new("/tmp/capture.har"));
            assert!(page_url.is_none());
        }
        _ => panic!("expected ReplayHar"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["qrsnap", "providers", "--config", "/etc/qrsnap.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/qrsnap.toml"))
    );
}

#[test]
fn cli_parse_resolve_requires_url() {
    assert!(Cli::try_parse_from(["qrsnap", "resolve"]).is_err());
}
