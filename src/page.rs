use regex::{NoExpand, Regex};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub const EVENTS_START_MARKER: &str = "<!-- EVENTS_START -->";
pub const EVENTS_END_MARKER: &str = "<!-- EVENTS_END -->";

/// Where the rendered fragment goes. Passed in explicitly so tests can point
/// the updater at a temporary document.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub path: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
}

impl PageConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            start_marker: EVENTS_START_MARKER.to_string(),
            end_marker: EVENTS_END_MARKER.to_string(),
        }
    }
}

/// Replaces the first span between the page's markers with the rendered
/// fragment and rewrites the file only when the content changed.
///
/// Everything outside the first marker pair is preserved byte-for-byte,
/// including any later marker-like text. Returns whether a write happened;
/// I/O errors propagate to the caller.
#[tracing::instrument(skip_all, fields(path = %config.path.display()))]
pub fn update_page(config: &PageConfig, events_html: &str) -> io::Result<bool> {
    let content = fs::read_to_string(&config.path)?;

    let marker_span = Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(&config.start_marker),
        regex::escape(&config.end_marker)
    ))
    .expect("Invalid marker pattern");
    let replacement = format!(
        "{}\n{}\n        {}",
        config.start_marker, events_html, config.end_marker
    );

    let updated = marker_span.replacen(&content, 1, NoExpand(&replacement));

    if updated.as_ref() != content.as_str() {
        fs::write(&config.path, updated.as_ref())?;
        info!("Teaching page updated with new events.");
        Ok(true)
    } else {
        info!("No changes to teaching page.");
        Ok(false)
    }
}
