//! PageRank algorithms
//!
//! Two independent estimators over the same [`Corpus`](crate::graph::Corpus):
//! a random-surfer sampler and a fixed-point iterative solver. Both return a
//! [`RankTable`] keyed by page name whose values sum to 1.

mod iteration;
mod sampling;
mod transition;

pub use iteration::{iterate_pagerank, IterativeSolver, SolverOutcome, SolverState};
pub use sampling::sample_pagerank;
pub use transition::transition_model;

use crate::error::{Result, SurfRankError};
use std::collections::BTreeMap;

/// Probability of each page being visited next
pub type Distribution = BTreeMap<String, f64>;

/// Final rank of each page
pub type RankTable = BTreeMap<String, f64>;

/// Probability of following a link rather than jumping at random
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Random-surfer steps taken by the sampler
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Largest per-page change at which iteration stops
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Round cap for the iterative solver
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Sum of all ranks in a table
pub fn total(table: &RankTable) -> f64 {
    table.values().sum()
}

/// Highest-ranked pages, best first. Ties keep page-name order.
pub fn top_n(table: &RankTable, n: usize) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = table.iter().map(|(p, &r)| (p.as_str(), r)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(SurfRankError::invalid(format!(
            "damping factor must be within [0, 1], got {}",
            damping
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_damping_bounds() {
        assert!(check_damping(0.0).is_ok());
        assert!(check_damping(1.0).is_ok());
        assert!(check_damping(DEFAULT_DAMPING).is_ok());
        assert!(check_damping(-0.01).is_err());
        assert!(check_damping(1.5).is_err());
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_top_n_orders_by_rank() {
        let table: RankTable = [("a", 0.2), ("b", 0.5), ("c", 0.3)]
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect();

        let top = top_n(&table, 2);
        assert_eq!(top, vec![("b", 0.5), ("c", 0.3)]);
        assert!((total(&table) - 1.0).abs() < 1e-12);
    }
}
