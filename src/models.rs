use serde::{Deserialize, Serialize};

/// One scraped product, written as one JSON object in the output array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub url: String,
    pub title: String,
    pub price: String,
    pub description: Option<String>,
    pub seller: Option<String>,
    pub condition: Option<String>,
    pub img_href: Option<String>,
}
