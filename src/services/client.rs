//! Recommendation API client
//!
//! Every call goes through one generic "GET path with params, decode JSON"
//! operation. Responses are cached per `(path, sorted params)` for a short
//! freshness window so that re-renders of the same view don't hit the API
//! again. Any transport failure, error status or undecodable body comes back
//! as an `AppError`; nothing is cached in that case.

use chrono::Duration as CacheTtl;
use reqwest::Client as HttpClient;
use serde_json::Value;
use std::time::Duration;

use crate::{
    cache::{CacheKey, ResponseCache},
    cached,
    error::{AppError, AppResult},
};

const REQUEST_TIMEOUT_SECS: u64 = 20;
const RESPONSE_CACHE_TTL_SECS: i64 = 600;

/// One GET request against the recommendation API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// Looks up a query parameter by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(&self.path, &self.params)
    }
}

/// Source of JSON documents keyed by API request
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetches the JSON body for `request`, or the reason it is unavailable
    async fn get_json(&self, request: &ApiRequest) -> AppResult<Value>;
}

#[derive(Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
    cache: ResponseCache,
    ttl: CacheTtl,
}

impl ApiClient {
    /// Creates a client for `base_url` sharing `cache`
    pub fn new(base_url: impl Into<String>, cache: ResponseCache) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
            ttl: CacheTtl::seconds(RESPONSE_CACHE_TTL_SECS),
        })
    }

    /// Overrides the freshness window of cached responses
    pub fn with_ttl(mut self, ttl: CacheTtl) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fetches `request`, serving a cached body while it is fresh
    pub async fn fetch(&self, request: &ApiRequest) -> AppResult<Value> {
        cached!(
            self.cache,
            request.cache_key(),
            self.ttl,
            self.request_json(request)
        )
    }

    /// Performs the HTTP call without consulting the cache
    async fn request_json(&self, request: &ApiRequest) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);

        let response = self
            .http_client
            .get(&url)
            .query(&request.params)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(path = %request.path, error = %e, "Recommendation API unreachable");
                e
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            tracing::warn!(
                path = %request.path,
                status = status.as_u16(),
                "Recommendation API returned error status"
            );
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(path = %request.path, error = %e, "Failed to decode API response");
            AppError::MalformedPayload(format!("Invalid JSON from {}: {}", request.path, e))
        })?;

        tracing::info!(
            path = %request.path,
            status = status.as_u16(),
            "Recommendation API call completed"
        );

        Ok(value)
    }
}

#[async_trait::async_trait]
impl JsonSource for ApiClient {
    async fn get_json(&self, request: &ApiRequest) -> AppResult<Value> {
        self.fetch(request).await
    }
}
