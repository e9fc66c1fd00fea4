use std::fmt::Write;

use crate::core::{Item, Stars};
use crate::signals::scored_review;

/// Five-slot star bar, filled up to the rating.
pub fn render_stars(stars: Stars) -> String {
    (0..Stars::MAX)
        .map(|i| if i < stars.get() { '★' } else { '☆' })
        .collect()
}

/// Per-review breakdown shown under an expanded row.
pub fn write_reviews(out: &mut String, item: &Item) {
    for scored in item.reviews.iter().map(scored_review) {
        let review = &scored.review;
        let _ = writeln!(out, "       Review: {}", review.text());
        let _ = writeln!(
            out,
            "         Stars: {}  Sentiment: {:<8}  {:>6.1}%",
            render_stars(review.stars()),
            review.sentiment(),
            scored.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Review;

    #[test]
    fn stars_bar() {
        assert_eq!(render_stars(Stars::try_from(1_i64).unwrap()), "★☆☆☆☆");
        assert_eq!(render_stars(Stars::try_from(3_i64).unwrap()), "★★★☆☆");
        assert_eq!(render_stars(Stars::try_from(5_i64).unwrap()), "★★★★★");
    }

    #[test]
    fn review_lines_in_order() {
        let item = Item::new(
            2,
            "Bluetooth Speaker",
            vec![
                Review::parse("Loud and clear sound!", 5, "Positive").unwrap(),
                Review::parse("Sleek design but heavy to carry.", 3, "Neutral").unwrap(),
            ],
        );
        let mut out = String::new();
        write_reviews(&mut out, &item);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "       Review: Loud and clear sound!");
        assert!(lines[1].contains("★★★★★"));
        assert!(lines[1].contains("Positive"));
        assert!(lines[1].ends_with("100.0%"));
        assert!(lines[3].contains("Neutral"));
        assert!(lines[3].ends_with("55.0%"));
    }
}
