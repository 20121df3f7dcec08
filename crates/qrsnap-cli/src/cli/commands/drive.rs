//! `qrsnap drive [script]` – headless run of the whole pipeline.
//!
//! The in-memory browser records navigations; `request`/`download` lines play
//! the part of the page's traffic. Every UI event is printed as it arrives.
//!
//! Traffic steps call the session's router directly rather than going through
//! the coordinator's channel inlet. The router task still runs but stays idle;
//! direct calls keep each step's UI events printed right after that step.

use anyhow::{Context, Result};
use qrsnap_core::browser::{ui_channel, MemoryBrowser, UiEvent};
use qrsnap_core::config::QrsnapConfig;
use qrsnap_core::coordinator::Coordinator;
use qrsnap_core::provider::ProviderRegistry;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

/// One line of a drive script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveStep {
    Scan(String),
    Page(String),
    Request(String),
    Download(String),
    Restart,
    Deny,
}

/// Parse one script line. `Ok(None)` for blank lines and comments.
pub fn parse_step(line: &str) -> Result<Option<DriveStep>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((v, a)) => (v, a.trim()),
        None => (line, ""),
    };
    let needs_arg = |make: fn(String) -> DriveStep| {
        if arg.is_empty() {
            anyhow::bail!("`{verb}` needs an argument");
        }
        Ok(Some(make(arg.to_string())))
    };
    match verb.to_ascii_lowercase().as_str() {
        "scan" => needs_arg(DriveStep::Scan),
        "page" => needs_arg(DriveStep::Page),
        "request" => needs_arg(DriveStep::Request),
        "download" => needs_arg(DriveStep::Download),
        "restart" => Ok(Some(DriveStep::Restart)),
        "deny" => Ok(Some(DriveStep::Deny)),
        other => anyhow::bail!("unknown step `{other}`"),
    }
}

pub async fn run_drive(
    cfg: &QrsnapConfig,
    registry: ProviderRegistry,
    script: Option<&Path>,
) -> Result<()> {
    let text = match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read script: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read script from stdin")?;
            buf
        }
    };

    for line in drive_script(cfg, registry, &text, Handle::current())? {
        println!("{line}");
    }
    Ok(())
}

/// Run a whole script against a fresh coordinator and return the output lines.
pub fn drive_script(
    cfg: &QrsnapConfig,
    registry: ProviderRegistry,
    text: &str,
    runtime: Handle,
) -> Result<Vec<String>> {
    let browser = Arc::new(MemoryBrowser::new());
    let (ui, mut ui_rx) = ui_channel();
    let mut coordinator = Coordinator::new(cfg, registry, browser.clone(), ui, runtime);
    let mut out = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let step = parse_step(line).with_context(|| format!("script line {}", lineno + 1))?;
        let Some(step) = step else { continue };
        tracing::debug!(?step, "drive step");

        match step {
            DriveStep::Scan(payload) => {
                let outcome = coordinator.on_scan(&payload);
                out.push(format!("scan {payload}: {outcome:?}"));
            }
            DriveStep::Page(url) => browser.set_page_url(url),
            DriveStep::Request(url) => match coordinator.router() {
                Some(router) => {
                    router.on_network_request(&url);
                }
                None => out.push(format!("request ignored (no session): {url}")),
            },
            DriveStep::Download(url) => match coordinator.router() {
                Some(router) => router.on_download_requested(&url, None),
                None => out.push(format!("download ignored (no session): {url}")),
            },
            DriveStep::Restart => {
                coordinator.restart_scanning();
                out.push("restart".to_string());
            }
            DriveStep::Deny => coordinator.permission_denied(),
        }
        collect_ui_events(&mut ui_rx, &mut out);
    }
    Ok(out)
}

fn collect_ui_events(rx: &mut UnboundedReceiver<UiEvent>, out: &mut Vec<String>) {
    while let Ok(event) = rx.try_recv() {
        out.push(match event {
            UiEvent::Resolved { session, resource } => {
                format!("resolved [session {session}] {} {}", resource.kind, resource.url)
            }
            UiEvent::NavigationFailed(err) => format!("navigation failed: {err}"),
            UiEvent::PermissionDenied => "camera permission denied".to_string(),
        });
    }
}
