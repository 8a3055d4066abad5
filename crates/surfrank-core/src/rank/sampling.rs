//! Monte-Carlo rank estimation by random-surfer sampling

use super::transition::distribution_for;
use super::{check_damping, Distribution, RankTable};
use crate::error::{Result, SurfRankError};
use crate::graph::Corpus;
use rand::prelude::*;
use std::collections::BTreeMap;

/// Estimate ranks as visit frequencies over an `n`-step random walk.
///
/// The walk starts on a uniformly random page. Each later step draws from the
/// transition model of the current page by scanning pages in corpus order and
/// taking the first whose cumulative probability reaches the draw, so ties
/// resolve toward the earlier page name. Pass a seeded generator (for example
/// `StdRng::seed_from_u64`) for reproducible results.
pub fn sample_pagerank<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> Result<RankTable> {
    check_damping(damping)?;
    if n == 0 {
        return Err(SurfRankError::invalid("sample count must be at least 1"));
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let mut counts: BTreeMap<&str, usize> = pages.iter().map(|p| (*p, 0)).collect();

    let mut current: &str = pages
        .choose(rng)
        .copied()
        .ok_or_else(|| SurfRankError::invalid("corpus must contain at least one page"))?;
    bump(&mut counts, current);

    for _ in 1..n {
        let dist = distribution_for(corpus, corpus.require(current)?, damping);
        let next = draw(&dist, rng.gen::<f64>());
        current = pages
            .iter()
            .copied()
            .find(|p| *p == next)
            .ok_or_else(|| SurfRankError::PageNotFound(next.to_string()))?;
        bump(&mut counts, current);
    }

    tracing::debug!("Sampled {} steps over {} pages", n, pages.len());

    Ok(counts
        .into_iter()
        .map(|(page, count)| (page.to_string(), count as f64 / n as f64))
        .collect())
}

fn bump(counts: &mut BTreeMap<&str, usize>, page: &str) {
    if let Some(count) = counts.get_mut(page) {
        *count += 1;
    }
}

/// First page whose cumulative probability meets `u`; the last page absorbs rounding.
fn draw(dist: &Distribution, u: f64) -> &str {
    let mut cumulative = 0.0;
    let mut last = "";
    for (page, p) in dist {
        cumulative += p;
        last = page.as_str();
        if cumulative >= u {
            return last;
        }
    }
    last
}
