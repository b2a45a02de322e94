// src/resolve.rs

// Three-tier DOI resolution. The book info page is sought in 3 places in
// sequence; resorting to the dx.doi.org URL means the book is in the
// Landolt-Börnstein series, which uses the legacy page layout.

use scraper::Html;

use crate::config::consts::{DOI_BASE, SPRINGER_BASE};
use crate::core::net::Fetch;
use crate::specs::Schema;

pub enum ResolvedPage {
    Found { doc: Html, schema: Schema },
    /// All three locations 404'd. Normal for withdrawn or unlisted items.
    Absent,
}

fn candidates(doi: &str) -> [(String, Schema); 3] {
    [
        (join!(SPRINGER_BASE, "/book/", doi, "#about"), Schema::Standard),
        (join!(SPRINGER_BASE, "/referencework/", doi, "#about"), Schema::Standard),
        (join!(DOI_BASE, "/", doi), Schema::LegacySeries),
    ]
}

/// Try each candidate location in order, short-circuiting on the first
/// non-404 response. A transport failure counts as a miss for that tier;
/// individual rows never abort the run.
pub fn resolve_book_page(fetcher: &dyn Fetch, doi: &str) -> ResolvedPage {
    for (url, schema) in candidates(doi) {
        match fetcher.get(&url) {
            Ok(page) if page.status == 404 => continue,
            Ok(page) => {
                return ResolvedPage::Found {
                    doc: Html::parse_document(&page.body),
                    schema,
                };
            }
            Err(e) => {
                logd!("{url}: {e}");
                continue;
            }
        }
    }
    ResolvedPage::Absent
}
