use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{Product, ProductId, PromotionPage};

/// Free-text product search (autocomplete backend).
pub async fn search_products(api: &ApiClient, query: &str) -> Result<Vec<Product>, ApiError> {
    api.get("/produtos", &[("query", query.to_string())]).await
}

/// Load one page of promotional products. `page` is zero-based.
pub async fn load_promotions(api: &ApiClient, page: u32, rows: u32) -> Result<PromotionPage, ApiError> {
    let params = [("page", page.to_string()), ("rows", rows.to_string())];
    api.get("/produtos/promocoes", &params).await
}

/// Send the selected products to the backend.
pub async fn submit_products(api: &ApiClient, products: &[Product]) -> Result<(), ApiError> {
    let body = serde_json::to_value(products).map_err(|e| ApiError::Decode(e.to_string()))?;
    api.post_unit("/produtos", Some(body)).await
}

/// Ask the backend to resynchronize a single product.
pub async fn sync_product(api: &ApiClient, id: &ProductId) -> Result<(), ApiError> {
    let endpoint = format!("/produtos/sincronizar/{}", urlencoding::encode(&id.to_string()));
    api.post_unit(&endpoint, None).await
}
