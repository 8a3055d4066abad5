//! Terminal output formatter

use super::RankSection;

pub fn format_sections(sections: &[RankSection<'_>]) -> String {
    let mut output = String::new();

    for section in sections {
        output.push_str(&section.title);
        output.push('\n');

        for (page, rank) in section.ranks {
            output.push_str(&format!("  {}: {:.4}\n", page, rank));
        }

        if let Some(rounds) = section.iterations {
            output.push_str(&format!("  (converged after {} rounds)\n", rounds));
        }
    }

    output
}
