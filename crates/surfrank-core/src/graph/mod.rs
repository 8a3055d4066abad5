//! Link graph model, link extraction, and corpus crawling

mod crawl;
mod link_extractor;

pub use crawl::{crawl, crawl_with_options, CrawlOptions};
pub use link_extractor::extract_links;

use crate::error::{Result, SurfRankError};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A validated, immutable link graph.
///
/// Every link target is itself a page, no page links to itself, and there is
/// at least one page. Pages iterate in sorted name order, which is also the
/// order the sampler scans when drawing the next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build a corpus, rejecting maps that break the closed-universe rules
    pub fn new(pages: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if pages.is_empty() {
            return Err(SurfRankError::invalid("corpus must contain at least one page"));
        }

        for (page, links) in &pages {
            if links.contains(page) {
                return Err(SurfRankError::invalid(format!(
                    "page {} links to itself",
                    page
                )));
            }
            if let Some(target) = links.iter().find(|t| !pages.contains_key(*t)) {
                return Err(SurfRankError::invalid(format!(
                    "page {} links to {} which is not in the corpus",
                    page, target
                )));
            }
        }

        Ok(Self { pages })
    }

    /// Build a corpus from `(page, links)` pairs
    pub fn from_links<I, P, L, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let pages = entries
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();
        Self::new(pages)
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a constructed corpus
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page names in iteration order
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.keys().map(String::as_str)
    }

    /// `(page, outbound links)` pairs in iteration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Outbound links of `page`, or `None` if it is not in the corpus
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    /// Whether `page` has no outbound links
    pub fn is_sink(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// Pages with no outbound links
    pub fn sinks(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page)
    }

    /// Total number of links in the graph
    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }

    pub(crate) fn require(&self, page: &str) -> Result<&BTreeSet<String>> {
        self.pages
            .get(page)
            .ok_or_else(|| SurfRankError::PageNotFound(page.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_valid() {
        let corpus = Corpus::from_links([
            ("a", vec!["b"]),
            ("b", vec!["a", "c"]),
            ("c", vec![]),
        ])
        .unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.link_count(), 3);
        assert!(corpus.is_sink("c"));
        assert!(!corpus.is_sink("a"));
        assert!(!corpus.is_sink("missing"));
        assert_eq!(corpus.sinks().collect::<Vec<_>>(), vec!["c"]);
        assert_eq!(corpus.pages().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_corpus_rejects_empty() {
        let err = Corpus::new(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, SurfRankError::InvalidArgument(_)));
    }

    #[test]
    fn test_corpus_rejects_self_link() {
        let err = Corpus::from_links([("a", vec!["a"])]).unwrap_err();
        assert!(err.to_string().contains("links to itself"));
    }

    #[test]
    fn test_corpus_rejects_dangling_target() {
        let err = Corpus::from_links([("a", vec!["b"])]).unwrap_err();
        assert!(matches!(err, SurfRankError::InvalidArgument(_)));
    }

    #[test]
    fn test_require_missing_page() {
        let corpus = Corpus::from_links([("a", Vec::<&str>::new())]).unwrap();
        let err = corpus.require("z").unwrap_err();
        assert!(matches!(err, SurfRankError::PageNotFound(_)));
    }
}
