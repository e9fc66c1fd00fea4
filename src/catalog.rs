use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Item, Review, Sentiment};
use crate::error::CatalogError;

/// An item as read from a catalog file, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: u32,
    pub name: String,
    /// Product description, used only for category classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub reviews: Vec<RawReview>,
}

/// A review as read from a catalog file. A missing sentiment is filled in by
/// the classifier before the review is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
    pub text: String,
    pub stars: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

impl RawReview {
    pub fn is_labeled(&self) -> bool {
        self.sentiment.is_some()
    }
}

/// Read and parse a JSON catalog file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<RawItem>, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let items = parse(&contents)?;
    tracing::info!(
        items = items.len(),
        reviews = items.iter().map(|i| i.reviews.len()).sum::<usize>(),
        "Catalog loaded from {}",
        path.display()
    );
    Ok(items)
}

/// Parse a JSON catalog, rejecting duplicate item ids.
pub fn parse(json: &str) -> Result<Vec<RawItem>, CatalogError> {
    let items: Vec<RawItem> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateItemId(item.id));
        }
    }
    Ok(items)
}

/// Validate raw items into engine items. Every review must carry a sentiment.
pub fn build_items(raw: Vec<RawItem>) -> Result<Vec<Item>, CatalogError> {
    raw.into_iter().map(build_item).collect()
}

pub fn build_item(raw: RawItem) -> Result<Item, CatalogError> {
    let item_id = raw.id;
    let reviews = raw
        .reviews
        .into_iter()
        .enumerate()
        .map(|(index, review)| {
            let sentiment = review
                .sentiment
                .ok_or(CatalogError::Unlabeled { item_id, index })?;
            Review::parse(review.text, review.stars, &sentiment)
                .map_err(|source| CatalogError::InvalidReview { item_id, index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Item::new(item_id, raw.name, reviews))
}

type DemoReview = (&'static str, i64, Sentiment);

const DEMO_PRODUCTS: &[(u32, &str, &[DemoReview])] = {
    use Sentiment::{Negative, Neutral, Positive};
    &[
        (1, "Wireless Earbuds", &[
            ("Great sound quality and comfort!", 5, Positive),
            ("Battery life could be better.", 3, Neutral),
            ("Stopped working after two weeks.", 2, Negative),
            ("Amazing clarity, love them.", 5, Positive),
        ]),
        (2, "Bluetooth Speaker", &[
            ("Loud and clear sound!", 5, Positive),
            ("Sleek design but heavy to carry.", 3, Neutral),
            ("Disappointed with bass performance.", 4, Negative),
        ]),
        (3, "Smart Fitness Band", &[
            ("Inaccurate step count ruined my goals.", 4, Negative),
            ("Great battery, but screen scratches easily.", 4, Negative),
            ("Looks good but not reliable.", 5, Negative),
            ("Nice app interface.", 4, Positive),
        ]),
        (4, "Laptop Stand", &[
            ("Very sturdy and great height.", 5, Positive),
            ("Perfect for my work from home setup.", 5, Positive),
            ("Solid build, value for money.", 4, Positive),
            ("Improved my posture instantly.", 5, Positive),
        ]),
        (5, "Phone Case", &[
            ("Stylish but slippery.", 5, Negative),
            ("Buttons are hard to press.", 4, Negative),
            ("Looks good but feels cheap.", 5, Negative),
            ("Easily scratches.", 4, Negative),
        ]),
        (6, "Portable Charger", &[
            ("Charges quickly and lasts long.", 5, Positive),
            ("Very handy while travelling.", 4, Positive),
            ("Feels slightly bulky but works alright.", 4, Neutral),
        ]),
        (7, "USB-C Hub", &[
            ("Very useful with my MacBook.", 5, Positive),
            ("Gets hot with extended use.", 4, Negative),
            ("Ports stopped working in a month.", 4, Negative),
            ("Solid build but flaky connection.", 5, Negative),
        ]),
        (8, "Mechanical Keyboard", &[
            ("Clicky and responsive keys!", 5, Positive),
            ("Perfect for coding.", 5, Positive),
            ("Loud but satisfying to use.", 4, Positive),
        ]),
        (9, "Gaming Mouse", &[
            ("Great grip and tracking.", 5, Positive),
            ("RGB looks amazing.", 5, Positive),
            ("Improved my aim significantly.", 5, Positive),
        ]),
        (10, "Webcam", &[
            ("Picture quality is bad in low light.", 4, Negative),
            ("Doesn't autofocus well.", 4, Negative),
            ("Sound is terrible, use a mic instead.", 5, Negative),
            ("Cheap plastic build.", 5, Negative),
        ]),
    ]
};

/// Built-in sample catalog of ten products, as unvalidated input.
pub fn demo_raw() -> Vec<RawItem> {
    DEMO_PRODUCTS
        .iter()
        .map(|(id, name, reviews)| RawItem {
            id: *id,
            name: name.to_string(),
            description: None,
            reviews: reviews
                .iter()
                .map(|(text, stars, sentiment)| RawReview {
                    text: text.to_string(),
                    stars: *stars,
                    sentiment: Some(sentiment.as_str().to_string()),
                })
                .collect(),
        })
        .collect()
}

/// Built-in sample catalog of ten products, used when no catalog file is configured.
pub fn demo_catalog() -> Vec<Item> {
    demo_raw()
        .into_iter()
        .filter_map(|raw| build_item(raw).ok())
        .collect()
}
