use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use super::error::ApiError;
use crate::config::Settings;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Thin wrapper over `reqwest::Client` bound to one backend.
///
/// Every call is echoed as an equivalent curl command (unless silenced) and
/// non-success statuses are turned into [`ApiError::Status`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }
        let client = reqwest::Client::builder()
            .user_agent(format!("vitrine/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        Self::new(settings.api_base_url.clone(), settings.api_token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let text = self.send(reqwest::Method::GET, endpoint, params, None).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = self.send(reqwest::Method::POST, endpoint, &[], Some(body)).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST where only the status matters; the response body is discarded.
    pub async fn post_unit(&self, endpoint: &str, body: Option<Value>) -> Result<(), ApiError> {
        self.send(reqwest::Method::POST, endpoint, &[], body).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        params: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.log_request(&method, &url, params, body.as_ref());

        let mut req = self.client.request(method.clone(), &url);
        if !self.token.is_empty() {
            req = req.bearer_auth(&self.token);
        }
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "backend returned an error status");
            log_output(format!(
                "Response:\n{}",
                Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red)
            ));
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        // Grayed out so the payload does not drown the actual output
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));
        tracing::debug!(%method, %url, bytes = text.len(), "backend call succeeded");
        Ok(text)
    }

    fn log_request(&self, method: &reqwest::Method, url: &str, params: &[(&str, String)], body: Option<&Value>) {
        let mut url_for_log = url.to_string();
        if !params.is_empty() {
            let query_string = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<String>>()
                .join("&");
            url_for_log = format!("{}?{}", url_for_log, query_string);
        }

        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)));

        if !self.token.is_empty() {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Authorization: Bearer ***'").fg(yansi::Color::Magenta)
            ));
        }
        if let Some(d) = body {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
            let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
            let escaped_json = json_str.replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn rejects_base_url_without_scheme() {
        let err = ApiClient::new("localhost:8080", "").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        set_silent(true);
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/setores").header("authorization", "Bearer s3cret");
            then.status(200).json_body(json!(["A"]));
        });

        let client = ApiClient::new(server.base_url(), "s3cret").unwrap();
        let sectors: Vec<String> = client.get("/setores", &[]).await.unwrap();
        assert_eq!(sectors, vec!["A".to_string()]);
        mock.assert();
    }

    #[tokio::test]
    async fn non_success_status_becomes_status_error() {
        set_silent(true);
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/produtos/sincronizar/9");
            then.status(500).body("boom");
        });

        let client = ApiClient::new(server.base_url(), "").unwrap();
        let err = client.post_unit("/produtos/sincronizar/9", None).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        set_silent(true);
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/config");
            then.status(200).body("not json");
        });

        let client = ApiClient::new(server.base_url(), "").unwrap();
        let err = client.get::<Value>("/config", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
