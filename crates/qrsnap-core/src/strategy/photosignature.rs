//! Photosignature: the page pulls `o.png` or `video.mp4` from a per-session
//! directory; the full-resolution still sits next to them as `a.jpg`.

use crate::observed::{ObservedUrl, ResolvedResource};

const PATH_MARKERS: [&str; 2] = ["photoqr.kr/r/", "photoqr3.kr/r/"];
const TRIGGER_SUFFIXES: [&str; 2] = ["o.png", "video.mp4"];
const REPLACEMENT_FILE: &str = "a.jpg";

pub(super) fn resolve(observed: &ObservedUrl) -> Option<ResolvedResource> {
    let lowered = observed.url.to_ascii_lowercase();
    if !PATH_MARKERS.iter().any(|m| lowered.contains(m)) {
        return None;
    }

    let mut parsed = url::Url::parse(&observed.url).ok()?;
    let path = parsed.path().to_ascii_lowercase();
    if !TRIGGER_SUFFIXES.iter().any(|s| path.ends_with(s)) {
        return None;
    }

    // Always the JPEG, even when the trigger was the video.
    parsed.set_query(None);
    parsed.set_fragment(None);
    parsed
        .path_segments_mut()
        .ok()?
        .pop()
        .push(REPLACEMENT_FILE);
    Some(ResolvedResource::image(String::from(parsed)))
}
