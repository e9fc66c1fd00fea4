use std::fmt::Write;

use crate::classifier::Classification;
use crate::core::pipeline::PipelineOutput;

use super::ExpandedRows;
use super::reviews::write_reviews;

const NAME_WIDTH: usize = 28;

/// Short label for a category lookup shown beside the product name.
pub fn category_label(classification: &Classification) -> String {
    match classification {
        Classification::Category { category, subcategory } => format!("{category} / {subcategory}"),
        Classification::Error { error } => format!("category unavailable: {error}"),
        Classification::Sentiment { sentiment } => format!("unexpected sentiment {sentiment}"),
    }
}

/// Ranked items, one row each, with expanded rows followed by their reviews.
pub fn write_table(out: &mut String, output: &PipelineOutput, expanded: &ExpandedRows) {
    let _ = writeln!(
        out,
        "{:>3}  {:<width$}  {:>7}  Actions",
        "#",
        "Product",
        "Score",
        width = NAME_WIDTH
    );

    if output.ranking.ranked.is_empty() {
        let _ = writeln!(out, "     No ranked products.");
        return;
    }

    for (index, ranked) in output.ranking.ranked.iter().enumerate() {
        let item = &ranked.item;
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:>6.1}%  [{}]",
            index + 1,
            item.name,
            ranked.composite_score,
            expanded.action_label(item.id),
            width = NAME_WIDTH
        );
        if let Some(classification) = output.categories.get(&item.id) {
            let _ = writeln!(out, "       ({})", category_label(classification));
        }
        if expanded.is_expanded(item.id) {
            write_reviews(out, item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::config::DisplayConfig;
    use crate::core::Ranking;
    use crate::ranking::rank;

    fn demo_output() -> PipelineOutput {
        PipelineOutput {
            ranking: rank(&demo_catalog()),
            ..Default::default()
        }
    }

    #[test]
    fn one_row_per_ranked_item() {
        let mut out = String::new();
        write_table(&mut out, &demo_output(), &ExpandedRows::default());
        // header + 10 rows
        assert_eq!(out.lines().count(), 11);
        let first = out.lines().nth(1).unwrap();
        assert!(first.starts_with("  1  Gaming Mouse"));
        assert!(first.contains("100.0%"));
        assert!(first.ends_with("[View Reviews]"));
    }

    #[test]
    fn scores_rounded_to_one_decimal() {
        let mut out = String::new();
        write_table(&mut out, &demo_output(), &ExpandedRows::default());
        // Mechanical Keyboard: 96.666…
        let keyboard = out.lines().find(|l| l.contains("Mechanical Keyboard")).unwrap();
        assert!(keyboard.contains("96.7%"));
    }

    #[test]
    fn expanded_row_shows_reviews() {
        let rows = ExpandedRows::from_config(&DisplayConfig {
            expanded: vec![9],
            ..Default::default()
        });
        let mut out = String::new();
        write_table(&mut out, &demo_output(), &rows);
        assert!(out.contains("[Hide Reviews]"));
        assert!(out.contains("Review: Great grip and tracking."));
        assert!(!out.contains("Review: Cheap plastic build."));
    }

    #[test]
    fn empty_ranking() {
        let output = PipelineOutput {
            ranking: Ranking::default(),
            ..Default::default()
        };
        let mut out = String::new();
        write_table(&mut out, &output, &ExpandedRows::default());
        assert!(out.contains("No ranked products."));
    }

    #[test]
    fn category_shown_under_row() {
        let mut output = demo_output();
        output.categories.insert(
            9,
            Classification::Category {
                category: "Electronics".into(),
                subcategory: "Accessories".into(),
            },
        );
        output.categories.insert(
            10,
            Classification::Error {
                error: "Failed to fetch response.".into(),
            },
        );
        let mut out = String::new();
        write_table(&mut out, &output, &ExpandedRows::default());
        assert!(out.contains("(Electronics / Accessories)"));
        assert!(out.contains("(category unavailable: Failed to fetch response.)"));
    }
}
