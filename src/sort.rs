// src/sort.rs
//! Ordering of retained tabs.
//!
//! Stability is a hard contract: tabs whose keys compare equal must keep
//! their original relative order, so the window's own ordering shows
//! through within each group.

use crate::model::TabSnapshot;
use clap::ValueEnum;
use serde::Deserialize;
use url::Url;

/// How retained tabs are ordered before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the window's original tab order.
    #[default]
    None,
    /// Order by lowercase hostname; unparsable URLs sort first (empty key).
    Domain,
    /// Order by lowercase title; absent titles sort first (empty key).
    Title,
}

// clap needs Display for default_value_t; names must match the CLI values
impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortMode::None => "none",
            SortMode::Domain => "domain",
            SortMode::Title => "title",
        };
        write!(f, "{}", name)
    }
}

/// The ordering key for one tab under the given mode.
pub fn sort_key(mode: SortMode, tab: &TabSnapshot) -> String {
    match mode {
        SortMode::None => String::new(),
        SortMode::Domain => Url::parse(tab.url_str())
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
            .unwrap_or_default(),
        SortMode::Title => tab.title_str().to_lowercase(),
    }
}

/// Sorts the tabs by the mode's key, preserving original order among equals.
///
/// `SortMode::None` is the identity. Otherwise decorate-sort-undecorate with
/// `slice::sort_by`, which is guaranteed stable, comparing keys
/// lexicographically.
pub fn sort_tabs(tabs: Vec<TabSnapshot>, mode: SortMode) -> Vec<TabSnapshot> {
    if mode == SortMode::None {
        return tabs;
    }

    let mut decorated: Vec<(String, TabSnapshot)> = tabs
        .into_iter()
        .map(|tab| (sort_key(mode, &tab), tab))
        .collect();
    decorated.sort_by(|a, b| a.0.cmp(&b.0));
    decorated.into_iter().map(|(_, tab)| tab).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tab(title: &str, url: &str) -> TabSnapshot {
        TabSnapshot {
            url: Some(url.to_string()),
            title: Some(title.to_string()),
            pinned: false,
        }
    }

    #[test]
    fn display_names_match_cli_value_names() {
        for mode in SortMode::value_variants() {
            let cli_name = mode.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(mode.to_string(), cli_name);
        }
    }

    #[test]
    fn none_mode_is_identity() {
        let tabs = vec![tab("b", "https://b.com"), tab("a", "https://a.com")];
        let sorted = sort_tabs(tabs.clone(), SortMode::None);
        assert_eq!(sorted, tabs);
    }

    #[test]
    fn domain_key_is_lowercase_host() {
        let t = tab("x", "https://Blog.Example.COM/post/1");
        assert_eq!(sort_key(SortMode::Domain, &t), "blog.example.com");
    }

    #[test]
    fn unparsable_url_gets_empty_domain_key() {
        let t = tab("x", "not a url");
        assert_eq!(sort_key(SortMode::Domain, &t), "");
    }

    #[test]
    fn sorts_by_domain() {
        let tabs = vec![
            tab("one", "https://zebra.org"),
            tab("two", "https://apple.com"),
            tab("three", "https://mango.net"),
        ];
        let sorted = sort_tabs(tabs, SortMode::Domain);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title_str()).collect();
        assert_eq!(titles, vec!["two", "three", "one"]);
    }

    #[test]
    fn title_sort_is_case_insensitive() {
        let tabs = vec![
            tab("banana", "https://a.com"),
            tab("Apple", "https://b.com"),
        ];
        let sorted = sort_tabs(tabs, SortMode::Title);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana"]);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let tabs = vec![
            tab("first", "https://same.com/1"),
            tab("zz", "https://aaa.com"),
            tab("second", "https://same.com/2"),
            tab("third", "https://same.com/3"),
        ];
        let sorted = sort_tabs(tabs, SortMode::Domain);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title_str()).collect();
        assert_eq!(titles, vec!["zz", "first", "second", "third"]);
    }
}
