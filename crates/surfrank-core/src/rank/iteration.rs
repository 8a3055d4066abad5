//! Fixed-point PageRank by power iteration
//!
//! Each round recomputes every page from the previous round only (double
//! buffered), renormalizes the new table to sum to 1, and measures the largest
//! per-page change. A sink's rank is spread uniformly over all pages, matching
//! the transition model.

use super::{
    check_damping, RankTable, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use crate::error::{Result, SurfRankError};
use crate::graph::Corpus;
use serde::Serialize;
use std::collections::HashMap;

/// Solver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverState {
    Initializing,
    Iterating,
    Converged,
    MaxIterationsExceeded,
}

/// Result of running the solver, converged or not
#[derive(Debug, Clone, Serialize)]
pub struct SolverOutcome {
    pub ranks: RankTable,
    /// Rounds performed
    pub iterations: usize,
    /// Largest per-page change in the last round
    pub max_change: f64,
    pub state: SolverState,
}

impl SolverOutcome {
    pub fn converged(&self) -> bool {
        self.state == SolverState::Converged
    }
}

/// Iterative PageRank solver
#[derive(Debug, Clone)]
pub struct IterativeSolver {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Stop once no page moves by more than this
    pub tolerance: f64,
    /// Round cap; `None` iterates until convergence
    pub max_iterations: Option<usize>,
    prior: Option<RankTable>,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            prior: None,
        }
    }
}

/// Corpus flattened to page indices
struct IndexedGraph<'a> {
    pages: Vec<&'a str>,
    outlinks: Vec<Vec<usize>>,
    sinks: Vec<usize>,
}

impl<'a> IndexedGraph<'a> {
    fn new(corpus: &'a Corpus) -> Self {
        let pages: Vec<&str> = corpus.pages().collect();
        let index: HashMap<&str, usize> = pages.iter().enumerate().map(|(i, p)| (*p, i)).collect();

        let outlinks: Vec<Vec<usize>> = corpus
            .iter()
            .map(|(_, links)| links.iter().filter_map(|l| index.get(l.as_str()).copied()).collect())
            .collect();
        let sinks = outlinks
            .iter()
            .enumerate()
            .filter(|(_, out)| out.is_empty())
            .map(|(i, _)| i)
            .collect();

        Self {
            pages,
            outlinks,
            sinks,
        }
    }

    fn len(&self) -> usize {
        self.pages.len()
    }
}

impl IterativeSolver {
    /// Create a new IterativeSolver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set or remove the round cap
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Start from `prior` instead of the uniform table. It is renormalized
    /// before the first round and must cover exactly the corpus pages.
    pub fn with_prior(mut self, prior: RankTable) -> Self {
        self.prior = Some(prior);
        self
    }

    /// Run the solver to a terminal state.
    ///
    /// Hitting the round cap is reported through `state`, not as an error.
    pub fn run(&self, corpus: &Corpus) -> Result<SolverOutcome> {
        self.validate()?;

        let graph = IndexedGraph::new(corpus);
        let mut ranks: Vec<f64> = Vec::new();
        let mut next = vec![0.0; graph.len()];
        let mut iterations = 0;
        let mut max_change = f64::INFINITY;
        let mut state = SolverState::Initializing;

        loop {
            state = match state {
                SolverState::Initializing => {
                    ranks = self.initial_ranks(&graph)?;
                    SolverState::Iterating
                }
                SolverState::Iterating => {
                    if self.max_iterations.is_some_and(|cap| iterations >= cap) {
                        SolverState::MaxIterationsExceeded
                    } else {
                        iterations += 1;
                        self.step(&graph, &ranks, &mut next);
                        max_change = ranks
                            .iter()
                            .zip(next.iter())
                            .map(|(old, new)| (old - new).abs())
                            .fold(0.0, f64::max);
                        std::mem::swap(&mut ranks, &mut next);
                        tracing::debug!("Round {}: max change {:.6}", iterations, max_change);

                        if max_change > self.tolerance {
                            SolverState::Iterating
                        } else {
                            SolverState::Converged
                        }
                    }
                }
                SolverState::Converged | SolverState::MaxIterationsExceeded => break,
            };
        }

        match state {
            SolverState::Converged => {
                tracing::info!("Converged after {} rounds", iterations)
            }
            _ => tracing::warn!(
                "Stopped after {} rounds without converging (max change {:.6})",
                iterations,
                max_change
            ),
        }

        let ranks = graph
            .pages
            .iter()
            .zip(ranks)
            .map(|(page, rank)| (page.to_string(), rank))
            .collect();

        Ok(SolverOutcome {
            ranks,
            iterations,
            max_change,
            state,
        })
    }

    /// Run the solver and return the converged ranks.
    ///
    /// Fails with `NotConverged` when the round cap is hit first.
    pub fn solve(&self, corpus: &Corpus) -> Result<RankTable> {
        let outcome = self.run(corpus)?;
        if outcome.converged() {
            Ok(outcome.ranks)
        } else {
            Err(SurfRankError::NotConverged {
                iterations: outcome.iterations,
                max_change: outcome.max_change,
            })
        }
    }

    fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SurfRankError::invalid(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(SurfRankError::invalid("max iterations must be at least 1"));
        }
        Ok(())
    }

    fn initial_ranks(&self, graph: &IndexedGraph<'_>) -> Result<Vec<f64>> {
        let n = graph.len();
        let Some(prior) = &self.prior else {
            return Ok(vec![1.0 / n as f64; n]);
        };

        if prior.len() != n {
            return Err(SurfRankError::invalid(format!(
                "prior has {} pages but the corpus has {}",
                prior.len(),
                n
            )));
        }

        let mut ranks = Vec::with_capacity(n);
        for page in &graph.pages {
            let rank = prior
                .get(*page)
                .copied()
                .ok_or_else(|| SurfRankError::PageNotFound(page.to_string()))?;
            if !rank.is_finite() || rank < 0.0 {
                return Err(SurfRankError::invalid(format!(
                    "prior rank for {} must be a non-negative number, got {}",
                    page, rank
                )));
            }
            ranks.push(rank);
        }

        let sum: f64 = ranks.iter().sum();
        if sum <= 0.0 {
            return Err(SurfRankError::invalid("prior ranks sum to zero"));
        }
        ranks.iter_mut().for_each(|r| *r /= sum);
        Ok(ranks)
    }

    /// One round: `next` is fully overwritten from `ranks`, then renormalized
    fn step(&self, graph: &IndexedGraph<'_>, ranks: &[f64], next: &mut [f64]) {
        let n = graph.len() as f64;
        let sink_mass: f64 = graph.sinks.iter().map(|&s| ranks[s]).sum();

        next.fill((1.0 - self.damping) / n + self.damping * sink_mass / n);

        for (page, out) in graph.outlinks.iter().enumerate() {
            if out.is_empty() {
                continue;
            }
            let share = self.damping * ranks[page] / out.len() as f64;
            for &target in out {
                next[target] += share;
            }
        }

        let sum: f64 = next.iter().sum();
        if sum > 0.0 {
            next.iter_mut().for_each(|r| *r /= sum);
        }
    }
}

/// Iterate to a fixed point with the default round cap
pub fn iterate_pagerank(corpus: &Corpus, damping: f64, tolerance: f64) -> Result<RankTable> {
    IterativeSolver::new()
        .with_damping(damping)
        .with_tolerance(tolerance)
        .solve(corpus)
}
