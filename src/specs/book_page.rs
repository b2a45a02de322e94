// src/specs/book_page.rs

// Standard springerlink book/referencework layout. The series block looks
// like:
//
//   <p data-test="test-series">
//     Part of the <a href="/bookseries/558">Lecture Notes in Computer Science</a>
//     <span>(LNCS, volume 11006)</span>
//   </p>
//
// plus a copyright span and an ebook-package link elsewhere on the page.

use scraper::Html;

use super::{BookFields, capture, find_year, first_text};

pub fn extract(doc: &Html) -> BookFields {
    let mut fields = BookFields::default();

    if let Some(series) = first_text(doc, "p[data-test='test-series'] > a") {
        fields.series = series;
    }
    if let Some(span) = first_text(doc, "p[data-test='test-series'] > span") {
        // "(LNCS, volume 11006)" → acronym + volume
        if let Some(acronym) = capture(r"\(([A-Za-z+]+)", &span) {
            fields.acronym = acronym;
        }
        if let Some(volume) = capture(r"volume (.+)\)", &span) {
            fields.volume = volume;
        }
    }
    if let Some(copyright) = first_text(doc, "span#copyright-info") {
        fields.year = find_year(&copyright);
    }
    if let Some(package) = first_text(doc, "a#ebook-package") {
        fields.package = package;
    }
    if let Some(subseries) = first_text(doc, "p[data-test='test-subseries'] > a") {
        fields.subseries = subseries;
    }

    fields
}
