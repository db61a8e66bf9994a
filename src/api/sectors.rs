use super::client::ApiClient;
use super::error::ApiError;
use crate::models::Sector;

/// Load sector names and expose each as a label/value pair.
pub async fn load_sectors(api: &ApiClient) -> Result<Vec<Sector>, ApiError> {
    let names: Vec<String> = api.get("/setores", &[]).await?;
    Ok(names.into_iter().map(Sector::from).collect())
}
