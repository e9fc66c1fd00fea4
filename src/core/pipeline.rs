use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{self, RawItem};
use crate::classifier::{Classification, ClassificationRequest, ClassifierClient};
use crate::core::Ranking;
use crate::error::ClassifierError;
use crate::ranking;

/// An item dropped before ranking, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedItem {
    pub id: u32,
    pub name: String,
    pub reason: String,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub ranking: Ranking,
    pub rejected: Vec<RejectedItem>,
    /// Category lookups by item id, present only when categorization ran.
    pub categories: BTreeMap<u32, Classification>,
    /// Reviews whose sentiment label came from the classifier.
    pub classified: usize,
}

/// Run the pipeline: label unlabeled reviews, validate, rank.
pub async fn run_pipeline(
    raw_items: Vec<RawItem>,
    classifier: Option<&ClassifierClient>,
    categorize: bool,
) -> PipelineOutput {
    let mut output = PipelineOutput::default();
    let mut items = Vec::with_capacity(raw_items.len());

    info!(items = raw_items.len(), "Pipeline started");

    for mut raw in raw_items {
        if let Some(client) = classifier {
            if categorize {
                if let Some(classification) = categorize_item(client, &raw).await {
                    output.categories.insert(raw.id, classification);
                }
            }

            match label_reviews(client, &mut raw).await {
                Ok(count) => output.classified += count,
                Err(e) => {
                    warn!(item_id = raw.id, "Sentiment classification failed: {e}");
                    output.rejected.push(RejectedItem {
                        id: raw.id,
                        name: raw.name,
                        reason: format!("sentiment unavailable: {e}"),
                    });
                    continue;
                }
            }
        }

        let (id, name) = (raw.id, raw.name.clone());
        match catalog::build_item(raw) {
            Ok(item) => items.push(item),
            Err(e) => {
                warn!(item_id = id, "Item rejected: {e}");
                output.rejected.push(RejectedItem {
                    id,
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    output.ranking = ranking::rank(&items);

    info!(
        ranked = output.ranking.ranked.len(),
        unscored = output.ranking.unscored.len(),
        rejected = output.rejected.len(),
        classified = output.classified,
        "Pipeline finished"
    );

    output
}

/// Fill in missing sentiment labels. Returns how many reviews were classified.
async fn label_reviews(client: &ClassifierClient, raw: &mut RawItem) -> Result<usize, ClassifierError> {
    let mut count = 0;
    for review in raw.reviews.iter_mut().filter(|r| !r.is_labeled()) {
        let sentiment = client.classify_sentiment(&review.text).await?;
        debug!(item_id = raw.id, %sentiment, "Review classified");
        review.sentiment = Some(sentiment.to_string());
        count += 1;
    }
    Ok(count)
}

async fn categorize_item(client: &ClassifierClient, raw: &RawItem) -> Option<Classification> {
    let description = raw.description.as_ref()?;
    let request = ClassificationRequest::Category {
        title: raw.name.clone(),
        description: description.clone(),
    };
    Some(Classification::from_result(client.call(&request).await))
}
