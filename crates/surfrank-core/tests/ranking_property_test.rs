//! Property-based tests for the rank estimators.
//!
//! Uses proptest to generate random closed link graphs (sinks included) and
//! checks normalization and transition validity on each.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, BTreeSet};
use surfrank_core::rank::total;
use surfrank_core::{
    iterate_pagerank, sample_pagerank, transition_model, Corpus, IterativeSolver,
};

/// Strategy producing a valid corpus of 1..=8 pages with arbitrary links.
fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    (1usize..=8).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), n), n).prop_map(move |matrix| {
            let pages: BTreeMap<String, BTreeSet<String>> = matrix
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let links = row
                        .iter()
                        .enumerate()
                        .filter(|(j, linked)| **linked && *j != i)
                        .map(|(j, _)| format!("p{}", j))
                        .collect();
                    (format!("p{}", i), links)
                })
                .collect();
            Corpus::new(pages).unwrap()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every transition distribution is a valid probability distribution.
    #[test]
    fn transition_is_distribution(corpus in corpus_strategy(), damping in 0.0f64..=1.0) {
        for page in corpus.pages() {
            let dist = transition_model(&corpus, page, damping).unwrap();
            prop_assert_eq!(dist.len(), corpus.len());
            prop_assert!(dist.values().all(|p| *p >= 0.0));
            let sum: f64 = dist.values().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    /// Iterated ranks cover every page and sum to one.
    #[test]
    fn iteration_normalizes(corpus in corpus_strategy(), damping in 0.0f64..0.95) {
        let ranks = iterate_pagerank(&corpus, damping, 0.001).unwrap();
        prop_assert_eq!(ranks.len(), corpus.len());
        prop_assert!(ranks.values().all(|r| *r >= 0.0));
        prop_assert!((total(&ranks) - 1.0).abs() < 1e-6);
    }

    /// Sampled ranks partition exactly `n` draws.
    #[test]
    fn sampling_normalizes(corpus in corpus_strategy(), seed in any::<u64>(), n in 1usize..500) {
        let mut rng = StdRng::seed_from_u64(seed);
        let ranks = sample_pagerank(&corpus, 0.85, n, &mut rng).unwrap();
        prop_assert_eq!(ranks.len(), corpus.len());
        prop_assert!((total(&ranks) - 1.0).abs() < 1e-9);
    }

    /// Restarting from a tightly converged table stops after one round.
    #[test]
    fn converged_output_is_a_fixed_point(corpus in corpus_strategy()) {
        let first = IterativeSolver::new().with_tolerance(1e-9).solve(&corpus).unwrap();
        let again = IterativeSolver::new().with_prior(first).run(&corpus).unwrap();
        prop_assert!(again.converged());
        prop_assert_eq!(again.iterations, 1);
    }
}
