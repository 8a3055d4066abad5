//! Links command

use crate::app::{LinksArgs, OutputFormat};
use anyhow::Result;
use surfrank_core::crawl;

pub fn run(args: LinksArgs, format: OutputFormat) -> Result<()> {
    let corpus = crawl(&args.corpus)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&corpus)?);
        }
        OutputFormat::Cli => {
            for (page, links) in corpus.iter() {
                if links.is_empty() {
                    println!("{} (sink)", page);
                } else {
                    let targets: Vec<&str> = links.iter().map(String::as_str).collect();
                    println!("{} -> {}", page, targets.join(", "));
                }
            }
            println!();
            println!("Pages: {}", corpus.len());
            println!("Links: {}", corpus.link_count());
        }
    }
    Ok(())
}
