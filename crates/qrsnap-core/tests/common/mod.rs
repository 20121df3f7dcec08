#![allow(dead_code)]

pub mod browser;

use qrsnap_core::browser::UiEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub const S3_IMAGE: &str = "https://photoism-cms-prd.s3.ap-northeast-2.amazonaws.com/2024/0101/print.jpg";
pub const S3_FRAME: &str = "https://photoism-cms-prd.s3.ap-northeast-2.amazonaws.com/2024/0101/frame.png";
pub const PHOTOISM_PAGE: &str = "https://qr.seobuk.kr/p/0101";

/// Next UI event, or panic after two seconds.
pub async fn next_event(rx: &mut UnboundedReceiver<UiEvent>) -> UiEvent {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for ui event")
        .expect("ui channel closed")
}

/// Asserts nothing else reaches the UI within a short grace period.
pub async fn assert_quiet(rx: &mut UnboundedReceiver<UiEvent>) {
    tokio::time::sleep(Duration::from_millis(100)).await;
    if let Ok(ev) = rx.try_recv() {
        panic!("unexpected ui event: {ev:?}");
    }
}
