use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// One page of the backend's promotional listing.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPage {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub content: Vec<Product>,
}
