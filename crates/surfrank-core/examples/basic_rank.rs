// Basic ranking example using surfrank as a library

use rand::rngs::StdRng;
use rand::SeedableRng;
use surfrank_core::rank::top_n;
use surfrank_core::{sample_pagerank, Corpus, IterativeSolver};

fn main() -> surfrank_core::Result<()> {
    println!("Surfrank Basic Ranking Example\n");

    let corpus = Corpus::from_links([
        ("index.html", vec!["about.html", "blog.html"]),
        ("about.html", vec!["index.html"]),
        ("blog.html", vec!["index.html", "post.html"]),
        ("post.html", vec![]),
    ])?;
    println!(
        "Corpus: {} pages, {} links, sinks: {:?}\n",
        corpus.len(),
        corpus.link_count(),
        corpus.sinks().collect::<Vec<_>>()
    );

    let mut rng = StdRng::seed_from_u64(42);
    let sampled = sample_pagerank(&corpus, 0.85, 10_000, &mut rng)?;
    println!("Sampling:");
    for (page, rank) in &sampled {
        println!("  {}: {:.4}", page, rank);
    }

    let outcome = IterativeSolver::new().run(&corpus)?;
    println!("\nIteration ({} rounds, {:?}):", outcome.iterations, outcome.state);
    for (page, rank) in top_n(&outcome.ranks, outcome.ranks.len()) {
        println!("  {}: {:.4}", page, rank);
    }

    Ok(())
}
