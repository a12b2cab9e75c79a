// src/format.rs
//! Renders retained tabs into the exported text.
//!
//! One line per tab, `"<title>": <url>`, entries separated by a single
//! blank line. The formatter is infallible: any title, including an absent
//! one, produces a valid single-line entry.

use crate::constants::{CHARS_PER_LINE_ESTIMATE, ENTRY_SEPARATOR};

/// Formats one tab into its exported line.
///
/// The title is sanitized: embedded `"` characters are escaped, any run of
/// whitespace (newlines and tabs included) collapses to a single space, and
/// leading/trailing whitespace is trimmed. The URL passes through verbatim.
pub fn format_line(title: Option<&str>, url: &str) -> String {
    let sanitized = sanitize_title(title.unwrap_or(""));
    format!("\"{}\": {}", sanitized, url)
}

/// Joins formatted lines with a blank-line separator, no trailing separator.
pub fn join_entries(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.len() * CHARS_PER_LINE_ESTIMATE);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(ENTRY_SEPARATOR);
        }
        out.push_str(line);
    }
    out
}

fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.trim().chars() {
        if c.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            out.push(' ');
            in_whitespace = false;
        }
        if c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_plain_title() {
        assert_eq!(
            format_line(Some("Rust Blog"), "https://blog.rust-lang.org"),
            "\"Rust Blog\": https://blog.rust-lang.org"
        );
    }

    #[test]
    fn escapes_embedded_quotes() {
        assert_eq!(
            format_line(Some("A \"B\""), "https://x.com"),
            "\"A \\\"B\\\"\": https://x.com"
        );
    }

    #[test]
    fn collapses_whitespace_runs_and_trims() {
        assert_eq!(
            format_line(Some("  C\n D\t\tE "), "https://y.com"),
            "\"C D E\": https://y.com"
        );
    }

    #[test]
    fn absent_title_becomes_empty() {
        assert_eq!(format_line(None, "https://z.com"), "\"\": https://z.com");
    }

    #[test]
    fn formatted_line_has_no_embedded_newline() {
        let line = format_line(Some("multi\nline\r\ntitle"), "https://x.com");
        assert!(!line.contains('\n'));
        assert_eq!(line, "\"multi line title\": https://x.com");
    }

    #[test]
    fn joins_with_blank_line_and_no_trailer() {
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join_entries(&lines), "a\n\nb\n\nc");
        assert_eq!(join_entries(&lines[..1]), "a");
        assert_eq!(join_entries(&[]), "");
    }
}
