//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use surfrank_core::RankTable;

/// One rank table with its heading
pub struct RankSection<'a> {
    /// JSON key
    pub key: &'static str,
    pub title: String,
    pub ranks: &'a RankTable,
    /// Rounds taken, shown when set
    pub iterations: Option<usize>,
}

impl<'a> RankSection<'a> {
    pub fn sampling(samples: usize, ranks: &'a RankTable) -> Self {
        Self {
            key: "sampling",
            title: format!("PageRank Results from Sampling (n = {})", samples),
            ranks,
            iterations: None,
        }
    }

    pub fn iteration(ranks: &'a RankTable, iterations: Option<usize>) -> Self {
        Self {
            key: "iteration",
            title: "PageRank Results from Iteration".to_string(),
            ranks,
            iterations,
        }
    }
}

/// Format rank tables
pub fn format_rank_report(sections: &[RankSection<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_sections(sections),
        OutputFormat::Cli => terminal::format_sections(sections),
    }
}
