//! JSON output formatter

use super::RankSection;

pub fn format_sections(sections: &[RankSection<'_>]) -> String {
    let mut output = serde_json::Map::new();
    for section in sections {
        output.insert(section.key.to_string(), serde_json::json!(section.ranks));
        if let Some(rounds) = section.iterations {
            output.insert("iterations".to_string(), serde_json::json!(rounds));
        }
    }

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
