//! Random-surfer transition model

use super::{check_damping, Distribution};
use crate::error::Result;
use crate::graph::Corpus;
use std::collections::BTreeSet;

/// Distribution over the next page given the surfer is on `page`.
///
/// A sink jumps uniformly to any page, itself included. Otherwise each linked
/// page gets `damping / |links|` and every page additionally gets
/// `(1 - damping) / N`.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    let links = corpus.require(page)?;
    Ok(distribution_for(corpus, links, damping))
}

pub(super) fn distribution_for(
    corpus: &Corpus,
    links: &BTreeSet<String>,
    damping: f64,
) -> Distribution {
    let n = corpus.len() as f64;

    if links.is_empty() {
        return corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect();
    }

    let jump = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    corpus
        .pages()
        .map(|p| {
            let linked = if links.contains(p) { follow } else { 0.0 };
            (p.to_string(), jump + linked)
        })
        .collect()
}
