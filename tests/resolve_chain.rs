// tests/resolve_chain.rs
// Fallback ordering of the three candidate locations, driven by a scripted
// fetcher. No network.

use std::cell::RefCell;
use std::error::Error;

use springer_enrich::core::net::{Fetch, PageResponse};
use springer_enrich::resolve::{ResolvedPage, resolve_book_page};
use springer_enrich::specs::Schema;

/// Scripted responses keyed by URL substring. Unmatched URLs 404.
/// A response with status 0 simulates a transport failure.
struct ScriptedFetch {
    responses: Vec<(&'static str, u16, &'static str)>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedFetch {
    fn new(responses: Vec<(&'static str, u16, &'static str)>) -> Self {
        Self { responses, calls: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetch for ScriptedFetch {
    fn get(&self, url: &str) -> Result<PageResponse, Box<dyn Error>> {
        self.calls.borrow_mut().push(url.to_string());
        for (pat, status, body) in &self.responses {
            if url.contains(pat) {
                if *status == 0 {
                    return Err("connection refused".into());
                }
                return Ok(PageResponse { status: *status, body: body.to_string() });
            }
        }
        Ok(PageResponse { status: 404, body: String::new() })
    }
}

const SERIES_PAGE: &str = r##"
  <p data-test="test-series"><a href="#">Lecture Notes in Physics</a></p>"##;

const LANDOLT_PAGE: &str = r#"
  <div class="publication-title"><span>Landolt-Börnstein - Group III</span></div>"#;

#[test]
fn book_endpoint_wins_when_it_resolves() {
    let fetch = ScriptedFetch::new(vec![("/book/", 200, SERIES_PAGE)]);

    match resolve_book_page(&fetch, "10.1007/978-3-030-00000-1") {
        ResolvedPage::Found { schema, .. } => assert_eq!(schema, Schema::Standard),
        ResolvedPage::Absent => panic!("expected a resolved page"),
    }
    let calls = fetch.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("/book/10.1007/978-3-030-00000-1"));
}

#[test]
fn referencework_is_second_and_stops_the_chain() {
    let fetch = ScriptedFetch::new(vec![
        ("/book/", 404, ""),
        ("/referencework/", 200, SERIES_PAGE),
        ("dx.doi.org", 200, LANDOLT_PAGE),
    ]);

    match resolve_book_page(&fetch, "10.1007/x") {
        ResolvedPage::Found { schema, doc } => {
            assert_eq!(schema, Schema::Standard);
            let fields = springer_enrich::specs::book_page::extract(&doc);
            assert_eq!(fields.series, "Lecture Notes in Physics");
        }
        ResolvedPage::Absent => panic!("expected a resolved page"),
    }

    let calls = fetch.calls();
    assert_eq!(calls.len(), 2, "must not fall through to dx.doi.org");
    assert!(calls[0].contains("/book/"));
    assert!(calls[1].contains("/referencework/"));
}

#[test]
fn doi_resolver_classifies_as_legacy_series() {
    let fetch = ScriptedFetch::new(vec![("dx.doi.org", 200, LANDOLT_PAGE)]);

    match resolve_book_page(&fetch, "10.1007/x") {
        ResolvedPage::Found { schema, doc } => {
            assert_eq!(schema, Schema::LegacySeries);
            let fields = springer_enrich::specs::landolt::extract(&doc);
            assert_eq!(fields.series, "Landolt-Börnstein - Group III");
        }
        ResolvedPage::Absent => panic!("expected a resolved page"),
    }
    assert_eq!(fetch.calls().len(), 3);
}

#[test]
fn all_tiers_missing_is_absent_not_an_error() {
    let fetch = ScriptedFetch::new(vec![]);

    assert!(matches!(resolve_book_page(&fetch, "10.1007/gone"), ResolvedPage::Absent));

    let calls = fetch.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].contains("link.springer.com/book/"));
    assert!(calls[1].contains("link.springer.com/referencework/"));
    assert!(calls[2].contains("dx.doi.org/"));
}

#[test]
fn transport_failure_degrades_to_next_tier() {
    let fetch = ScriptedFetch::new(vec![
        ("/book/", 0, ""), // tier 1 network error
        ("/referencework/", 200, SERIES_PAGE),
    ]);

    match resolve_book_page(&fetch, "10.1007/x") {
        ResolvedPage::Found { schema, .. } => assert_eq!(schema, Schema::Standard),
        ResolvedPage::Absent => panic!("expected tier 2 to resolve"),
    }
    assert_eq!(fetch.calls().len(), 2);
}
