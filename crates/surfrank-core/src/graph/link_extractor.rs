//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract anchor `href` targets from page content, dropping links back to `source_page`
pub fn extract_links(content: &str, source_page: &str) -> BTreeSet<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str())
        .filter(|target| *target != source_page)
        .map(str::to_string)
        .collect()
}
