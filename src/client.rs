use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::StatsError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Read-only client for the scoring service. All state lives upstream; this
/// just turns queries into GETs against a fixed base address.
#[derive(Clone)]
pub struct StatsClient {
    pub(crate) http: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StatsError> {
        let http = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Base URL from `SCRIMBOARD_API_URL`, falling back to the default local
    /// service address.
    pub fn from_env() -> Result<Self, StatsError> {
        let base = std::env::var("SCRIMBOARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// One GET, one JSON body. Any non-2xx status is a failure regardless of
    /// body content; the body is carried along for the diagnostic log only.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StatsError> {
        let url = self.url(path);
        tracing::debug!(%url, "issuing query");
        let resp = self.http.get(&url).query(query).send().await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StatsError> {
        let url = self.url(path);
        tracing::debug!(%url, "issuing update");
        let resp = self.http.post(&url).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, StatsError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
