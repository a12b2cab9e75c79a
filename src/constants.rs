// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! what the exporter filters, how it joins output, and where it writes.

// ---------------------------------------------------------------------------
// URL classification
// ---------------------------------------------------------------------------

/// Scheme prefixes that identify browser-internal or extension-internal pages.
///
/// Matching is a plain string prefix check, never URL parsing: internal pages
/// like `chrome://settings` or `about:blank` are not guaranteed to parse as
/// standard URLs.
pub const INTERNAL_URL_PREFIXES: &[&str] = &[
    "chrome://",
    "chrome-extension://",
    "edge://",
    "brave://",
    "opera://",
    "vivaldi://",
    "about:",
];

/// The search-engine domain the Google classifier matches against.
///
/// Host matching is deliberately loose (subdomains, regional TLDs like
/// `google.co.uk` via the `.google.` infix, `www.` aliases) to catch the
/// many hostnames Google serves results from.
pub const GOOGLE_DOMAIN: &str = "google.com";

/// Results path on a Google search host.
pub const GOOGLE_SEARCH_PATH: &str = "/search";

/// Redirect path Google wraps result links in.
pub const GOOGLE_REDIRECT_PATH: &str = "/url";

/// Scholar results path on the `scholar.` subdomain.
pub const GOOGLE_SCHOLAR_PATH: &str = "/scholar";

// ---------------------------------------------------------------------------
// Output formatting
// ---------------------------------------------------------------------------

/// Separator between exported entries: one blank line, no trailing separator.
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Bullet between fields of the diagnostics summary.
pub const SUMMARY_BULLET: &str = " \u{2022} ";

/// Estimated characters per formatted tab line, used to pre-allocate the
/// output string. A performance hint, not a constraint.
pub const CHARS_PER_LINE_ESTIMATE: usize = 96;

// ---------------------------------------------------------------------------
// File sink
// ---------------------------------------------------------------------------

/// Extension for exported files.
pub const EXPORT_FILE_EXTENSION: &str = "txt";

/// Filename stem prefix for exported files, as in `tabs_2024-06-01_0930.txt`.
pub const EXPORT_FILE_PREFIX: &str = "tabs";
