//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "surfrank")]
#[command(
    author,
    version,
    about = "Rank a directory of linked HTML pages with PageRank"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "SURFRANK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank pages by sampling and by iteration
    Rank(RankArgs),

    /// Rank pages by random-surfer sampling
    Sample(RankArgs),

    /// Rank pages by fixed-point iteration
    Iterate(RankArgs),

    /// Show the crawled link graph
    Links(LinksArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    #[command(flatten)]
    pub params: RankParams,
}

/// Overrides for config values
#[derive(Args, Default)]
pub struct RankParams {
    /// Damping factor in [0, 1]
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random-surfer samples
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for the sampler
    #[arg(long)]
    pub seed: Option<u64>,

    /// Convergence tolerance for iteration
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Round cap for iteration
    #[arg(long, conflicts_with = "no_max_iterations")]
    pub max_iterations: Option<usize>,

    /// Iterate until convergence with no round cap
    #[arg(long)]
    pub no_max_iterations: bool,
}

#[derive(Args)]
pub struct LinksArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
