// src/specs/landolt.rs

// Legacy layout for Landolt-Börnstein volumes, reached through the
// dx.doi.org resolver. Only the series title and the enumeration line are
// present; acronym, package and subseries stay at their defaults.

use scraper::Html;

use super::{BookFields, capture, find_year, first_text, first_text_raw};

pub fn extract(doc: &Html) -> BookFields {
    let mut fields = BookFields::default();

    if let Some(series) = first_text(doc, "div.publication-title > span") {
        fields.series = series;
    }
    // The enumeration is taken raw: the volume pattern anchors on the
    // space after the token, which may be the span's trailing space
    // ("Volume 4C ").
    if let Some(enumeration) = first_text_raw(doc, "div.document__enumeration > span") {
        // "Volume 19A1 2009" → volume + year
        if let Some(volume) = capture(r"Volume (.+) ", &enumeration) {
            fields.volume = volume;
        }
        fields.year = find_year(&enumeration);
    }

    fields
}
