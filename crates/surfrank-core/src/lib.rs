//! Surfrank Core Library
//!
//! PageRank for small, in-memory link graphs.
//!
//! # Features
//! - Validated link graph model with sink detection
//! - Random-surfer transition model
//! - Monte-Carlo rank estimation with an injected, seedable RNG
//! - Fixed-point iteration with renormalization and an iteration cap
//! - Crawling a directory of HTML pages into a link graph

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::Config;
pub use error::{Error, Result, SurfRankError};
pub use graph::{crawl, crawl_with_options, extract_links, CrawlOptions, Corpus};
pub use rank::{
    iterate_pagerank, sample_pagerank, transition_model, Distribution, IterativeSolver, RankTable,
    SolverOutcome, SolverState, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES,
    DEFAULT_TOLERANCE,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "surfrank";
