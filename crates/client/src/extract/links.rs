//! Link harvesting and URL fixing from HTML documents.

use scraper::{Html, Selector};
use std::collections::HashSet;

/// Normalization policy derived from the document's `<base>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// No usable base: keep only absolute http(s) hrefs.
    Filter,
    /// Base declared: prefix relative hrefs with its href value.
    Rebase(String),
}

/// Only the first `<base>` tag is effective, matching standard HTML
/// semantics. A `<base>` without an href declares nothing and falls back
/// to filter mode.
fn detect_mode(document: &Html) -> Mode {
    let selector = Selector::parse("base").expect("invalid selector");

    match document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
    {
        Some(href) => Mode::Rebase(href.to_string()),
        None => Mode::Filter,
    }
}

fn is_absolute(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Extract the deduplicated set of hyperlinks from a parsed document.
///
/// Walks every `<a>` tag in document order, applies the base-dependent
/// normalization policy, and collects the results into a set. Anchors
/// without an href carry no target and are skipped. Iteration order of
/// the returned set is not meaningful.
pub fn extract_from_document(document: &Html) -> HashSet<String> {
    let selector = Selector::parse("a").expect("invalid selector");
    let mode = detect_mode(document);

    match &mode {
        Mode::Rebase(base) => {
            tracing::debug!(base = %base, "rebuilding relative links against <base> href")
        }
        Mode::Filter => tracing::debug!("no <base> href found; filtering out non-absolute links"),
    }

    let mut links = HashSet::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        match &mode {
            Mode::Rebase(base) => {
                if is_absolute(href) {
                    links.insert(href.to_string());
                } else {
                    let trimmed = href.strip_prefix('/').unwrap_or(href);
                    links.insert(format!("{base}{trimmed}"));
                }
            }
            Mode::Filter => {
                if is_absolute(href) {
                    links.insert(href.to_string());
                }
            }
        }
    }

    links
}

/// Parse HTML text and extract its hyperlink set.
pub fn extract_links(html: &str) -> HashSet<String> {
    extract_from_document(&Html::parse_document(html))
}
