//! Rank commands

use super::resolve_config;
use crate::app::{OutputFormat, RankArgs};
use crate::output::{format_rank_report, RankSection};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfrank_core::{crawl, sample_pagerank, Config, Corpus, RankTable};

/// Rank by sampling, then by iteration
pub fn run(args: RankArgs, base: &Config, format: OutputFormat) -> Result<()> {
    let config = resolve_config(&args.params, base)?;
    let corpus = crawl(&args.corpus)?;

    let sampled = sample(&corpus, &config)?;
    let iterated = config.solver().solve(&corpus)?;

    let sections = [
        RankSection::sampling(config.samples, &sampled),
        RankSection::iteration(&iterated, None),
    ];
    print!("{}", format_rank_report(&sections, format));
    Ok(())
}

/// Rank by sampling only
pub fn run_sample(args: RankArgs, base: &Config, format: OutputFormat) -> Result<()> {
    let config = resolve_config(&args.params, base)?;
    let corpus = crawl(&args.corpus)?;

    let sampled = sample(&corpus, &config)?;

    print!(
        "{}",
        format_rank_report(&[RankSection::sampling(config.samples, &sampled)], format)
    );
    Ok(())
}

/// Rank by iteration only
pub fn run_iterate(
    args: RankArgs,
    base: &Config,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let config = resolve_config(&args.params, base)?;
    let corpus = crawl(&args.corpus)?;

    let outcome = config.solver().run(&corpus)?;
    let iterations = outcome.iterations;
    if !outcome.converged() {
        return Err(surfrank_core::SurfRankError::NotConverged {
            iterations,
            max_change: outcome.max_change,
        }
        .into());
    }

    let rounds = verbose.then_some(iterations);
    print!(
        "{}",
        format_rank_report(&[RankSection::iteration(&outcome.ranks, rounds)], format)
    );
    Ok(())
}

fn sample(corpus: &Corpus, config: &Config) -> surfrank_core::Result<RankTable> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sample_pagerank(corpus, config.damping, config.samples, &mut rng)
}
