// News provider HTTP client.
// Handles authentication, response caching, and status checking for every outbound call.

use std::sync::Arc;

use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, error};

use crate::cache::{Clock, ResponseCache, SystemClock};
use crate::config::NewsConfig;
use crate::error::{NewsError, Result};

use super::query::Query;

/// Single point of contact with the news provider.
///
/// Identical queries are served from the cache for one TTL window. This is not
/// in-flight dedup: two concurrent misses for the same key both reach the
/// network, and the later store wins.
pub struct NewsClient {
    client: Client,
    config: NewsConfig,
    cache: ResponseCache,
}

impl NewsClient {
    /// Create a client using wall-clock time for cache expiry.
    pub fn new(config: NewsConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a client with an explicit time source.
    pub fn with_clock(config: NewsConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let cache = ResponseCache::new(config.cache_ttl(), clock);

        Ok(Self {
            client,
            config,
            cache,
        })
    }

    /// Create a client from NEWS_* environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(NewsConfig::from_env()?)
    }

    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fetch a query's payload, serving live cache entries without touching the network.
    pub async fn request(&self, query: &Query) -> Result<Value> {
        let key = query.cache_key();

        if let Some(payload) = self.cache.get(&key) {
            debug!(endpoint = %query.endpoint(), key = %key, "cache hit");
            return Ok(payload);
        }

        debug!(endpoint = %query.endpoint(), key = %key, "cache miss");

        match self.fetch(query).await {
            Ok(payload) => {
                debug!(
                    endpoint = %query.endpoint(),
                    ttl_secs = self.cache.ttl().as_secs(),
                    "cached response"
                );
                self.cache.insert(key, payload.clone());
                Ok(payload)
            }
            Err(e) => {
                error!(endpoint = %query.endpoint(), error = %e, "news API request failed");
                Err(e)
            }
        }
    }

    async fn fetch(&self, query: &Query) -> Result<Value> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            query.endpoint().path()
        );

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .query(query.params())
            .send()
            .await?;

        let body = check_response(response).await?.text().await?;
        let payload: Value = serde_json::from_str(&body).map_err(NewsError::Body)?;
        check_provider_status(payload)
    }
}

/// Check HTTP status and convert failures.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or(body);

    Err(NewsError::Status { status, message })
}

/// The provider reports its own outcome in a top-level `status` field; only "ok" is success.
fn check_provider_status(payload: Value) -> Result<Value> {
    if payload.get("status").and_then(Value::as_str) == Some("ok") {
        return Ok(payload);
    }

    let field = |name: &str| payload.get(name).and_then(Value::as_str).map(str::to_string);
    Err(NewsError::Provider {
        code: field("code"),
        message: field("message").unwrap_or_else(|| "API request failed".to_string()),
    })
}
