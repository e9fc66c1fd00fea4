use tracing::debug;

use crate::core::{Item, RankedItem, Ranking};
use crate::signals::SignalEngine;

/// Rank items by descending composite score.
///
/// The sort is stable: items with equal scores keep their input order.
/// Items without reviews cannot be scored and are returned in `unscored`.
pub fn rank(items: &[Item]) -> Ranking {
    rank_with(SignalEngine::standard(), items)
}

pub fn rank_with(engine: &SignalEngine, items: &[Item]) -> Ranking {
    let mut ranking = Ranking::default();

    for item in items {
        match engine.aggregate(&item.reviews) {
            Ok(composite_score) => ranking.ranked.push(RankedItem {
                item: item.clone(),
                composite_score,
            }),
            Err(e) => {
                debug!(item_id = item.id, "Item left unranked: {e}");
                ranking.unscored.push(item.clone());
            }
        }
    }

    ranking
        .ranked
        .sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));

    ranking
}
