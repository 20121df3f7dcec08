//! Test browser that records navigations and can be told to fail them.

use qrsnap_core::browser::{Browser, NavigationError};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingBrowser {
    page_url: Mutex<Option<String>>,
    navigations: Mutex<Vec<String>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn set_page_url(&self, url: &str) {
        *self.page_url.lock().unwrap() = Some(url.to_string());
    }

    /// Make every following navigation fail with `reason`.
    pub fn fail_navigation(&self, reason: &str) {
        *self.fail_with.lock().unwrap() = Some(reason.to_string());
    }
}

impl Browser for RecordingBrowser {
    fn current_page_url(&self) -> Option<String> {
        self.page_url.lock().unwrap().clone()
    }

    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.navigations.lock().unwrap().push(url.to_string());
        if let Some(reason) = self.fail_with.lock().unwrap().clone() {
            return Err(NavigationError {
                url: url.to_string(),
                reason,
            });
        }
        self.set_page_url(url);
        Ok(())
    }
}
