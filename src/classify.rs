// src/classify.rs
//! Pure URL predicates used by the collection filters.
//!
//! Both classifiers are total: any input that fails to match (including
//! malformed URLs) yields `false`. No error ever escapes this module.

use crate::constants::{
    GOOGLE_DOMAIN, GOOGLE_REDIRECT_PATH, GOOGLE_SCHOLAR_PATH, GOOGLE_SEARCH_PATH,
    INTERNAL_URL_PREFIXES,
};
use url::Url;

/// Whether the URL points at a browser-internal or extension-internal page.
///
/// Plain prefix check — internal pages are not guaranteed to parse as URLs,
/// so no parsing is attempted.
pub fn is_internal_url(url: &str) -> bool {
    INTERNAL_URL_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Whether the URL is a Google search-results page.
///
/// Host matching is intentionally loose to catch regional TLD variants
/// (`google.de`, `google.co.uk`) via the `.google.` infix; the path check
/// then distinguishes results pages from other Google properties, so
/// `https://google.com/maps` is not a search URL.
pub fn is_google_search_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    let host_matches = host == GOOGLE_DOMAIN
        || host.ends_with(&format!(".{}", GOOGLE_DOMAIN))
        || host.contains(".google.")
        || host.starts_with("www.google.");
    if !host_matches {
        return false;
    }

    let path = parsed.path();
    let has_query_term = parsed.query_pairs().any(|(key, _)| key == "q");

    path == GOOGLE_SEARCH_PATH
        || path == GOOGLE_REDIRECT_PATH
        || (host.starts_with("scholar.") && (path == GOOGLE_SCHOLAR_PATH || has_query_term))
        || (path == "/" && has_query_term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_prefixes_match() {
        assert!(is_internal_url("chrome://settings"));
        assert!(is_internal_url("chrome-extension://abcdef/popup.html"));
        assert!(is_internal_url("about:blank"));
        assert!(is_internal_url("edge://flags"));
    }

    #[test]
    fn ordinary_urls_are_not_internal() {
        assert!(!is_internal_url("https://example.com"));
        assert!(!is_internal_url("http://chrome.com"));
        assert!(!is_internal_url(""));
        assert!(!is_internal_url("not a url at all"));
    }

    #[test]
    fn search_results_pages_match() {
        assert!(is_google_search_url("https://www.google.com/search?q=cats"));
        assert!(is_google_search_url("https://google.com/search?q=rust"));
        assert!(is_google_search_url("https://www.google.de/search?q=katzen"));
        assert!(is_google_search_url("https://www.google.co.uk/search?q=tea"));
    }

    #[test]
    fn redirect_links_match() {
        assert!(is_google_search_url(
            "https://www.google.com/url?sa=t&url=https%3A%2F%2Fexample.com"
        ));
    }

    #[test]
    fn scholar_matches_by_path_or_query() {
        assert!(is_google_search_url(
            "https://scholar.google.com/scholar?q=borrow+checker"
        ));
        assert!(is_google_search_url(
            "https://scholar.google.com/citations?q=rust"
        ));
        assert!(!is_google_search_url("https://scholar.google.com/citations"));
    }

    #[test]
    fn homepage_with_query_matches() {
        assert!(is_google_search_url("https://www.google.com/?q=cats"));
        assert!(!is_google_search_url("https://www.google.com/"));
    }

    #[test]
    fn other_google_properties_do_not_match() {
        assert!(!is_google_search_url("https://google.com/maps"));
        assert!(!is_google_search_url("https://mail.google.com/mail/u/0/"));
        assert!(!is_google_search_url("https://docs.google.com/document/d/1"));
    }

    #[test]
    fn non_google_hosts_do_not_match() {
        assert!(!is_google_search_url("https://duckduckgo.com/?q=cats"));
        assert!(!is_google_search_url("https://example.com/search?q=cats"));
    }

    #[test]
    fn malformed_urls_never_match() {
        assert!(!is_google_search_url(""));
        assert!(!is_google_search_url("not a url"));
        assert!(!is_google_search_url("google.com/search?q=cats"));
    }
}
