//! Corpus crawling: a flat directory of HTML pages into a link graph

use super::{extract_links, Corpus};
use crate::error::{Result, SurfRankError};
use glob::Pattern;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

/// Crawl options
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// File name pattern for pages
    pub pattern: String,
    pub follow_symlinks: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            pattern: "*.html".to_string(),
            follow_symlinks: true,
        }
    }
}

/// Crawl `root` with default options
pub fn crawl(root: &Path) -> Result<Corpus> {
    crawl_with_options(root, &CrawlOptions::default())
}

/// Parse every page directly inside `root` and build a corpus.
///
/// Pages are keyed by file name. Links to the page itself and links to names
/// outside the crawled set are dropped.
pub fn crawl_with_options(root: &Path, options: &CrawlOptions) -> Result<Corpus> {
    if !root.is_dir() {
        return Err(SurfRankError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("corpus directory not found: {}", root.display()),
        )));
    }

    let pattern = Pattern::new(&options.pattern)?;
    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(options.follow_symlinks);

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !pattern.matches(&name) {
            continue;
        }

        let content = std::fs::read_to_string(entry.path())?;
        let links = extract_links(&content, &name);
        tracing::debug!("Parsed {} with {} raw links", name, links.len());
        raw.insert(name, links);
    }

    if raw.is_empty() {
        return Err(SurfRankError::invalid(format!(
            "no pages matching {} in {}",
            options.pattern,
            root.display()
        )));
    }

    let names: BTreeSet<String> = raw.keys().cloned().collect();
    let pages: BTreeMap<String, BTreeSet<String>> = raw
        .into_iter()
        .map(|(page, links)| {
            let kept = links.into_iter().filter(|l| names.contains(l)).collect();
            (page, kept)
        })
        .collect();

    let corpus = Corpus::new(pages)?;
    tracing::info!(
        "Crawled {} pages with {} links from {}",
        corpus.len(),
        corpus.link_count(),
        root.display()
    );
    Ok(corpus)
}
