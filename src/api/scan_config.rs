use super::client::ApiClient;
use super::error::ApiError;
use crate::models::ScanConfig;

/// Fetch the scan-timing configuration.
pub async fn load_scan_config(api: &ApiClient) -> Result<ScanConfig, ApiError> {
    api.get("/config", &[]).await
}

/// Persist the configuration; the backend answers with the stored version.
pub async fn save_scan_config(api: &ApiClient, config: &ScanConfig) -> Result<ScanConfig, ApiError> {
    api.post("/config", config).await
}
