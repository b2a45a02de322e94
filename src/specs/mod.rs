// src/specs/mod.rs
//! Page-specific extraction for Springer book info pages.
//!
//! Each spec encodes where the ground truth lives in one page layout and how
//! to pull it out tolerantly: every lookup is independent, and a missing
//! node or a failed pattern leaves that field at its default instead of
//! aborting the row. The caller never sees an error from these modules.
//!
//! - `book_page` — the regular springerlink layout (`/book/…` and
//!   `/referencework/…` resolve to it).
//! - `landolt` — the legacy layout the dx.doi.org resolver lands on for
//!   Landolt-Börnstein volumes.

pub mod book_page;
pub mod landolt;

use regex::Regex;
use scraper::{Html, Selector};

use crate::core::sanitize::normalize_ws;

/// Which extraction schema applies to a resolved page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    Standard,
    LegacySeries,
}

/// The six fields written back into the report, one set per book row.
#[derive(Clone, Debug, PartialEq)]
pub struct BookFields {
    pub series: String,
    pub acronym: String,
    pub volume: String,
    pub year: Option<u32>,
    pub package: String,
    pub subseries: String,
}

impl Default for BookFields {
    fn default() -> Self {
        Self {
            series: s!("Unavailable"),
            acronym: s!(),
            volume: s!(),
            year: None,
            package: s!(),
            subseries: s!(),
        }
    }
}

/// Text of the first element matching `selector`, whitespace-collapsed.
/// Misses (including an unparseable selector) are None, never errors.
pub(crate) fn first_text(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let el = doc.select(&sel).next()?;
    let text = normalize_ws(&el.text().collect::<String>());
    if text.is_empty() { None } else { Some(text) }
}

/// Like `first_text`, but with the element's spacing left untouched, for
/// patterns that anchor on the page's original whitespace.
pub(crate) fn first_text_raw(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let el = doc.select(&sel).next()?;
    let text: String = el.text().collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

/// First capture group of `pattern` in `text`, if any.
pub(crate) fn capture(pattern: &str, text: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| s!(m.as_str()))
}

/// First four-digit run in `text`, read as a year.
pub(crate) fn find_year(text: &str) -> Option<u32> {
    let re = Regex::new(r"\d{4}").ok()?;
    re.find(text)?.as_str().parse().ok()
}
