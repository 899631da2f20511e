//! REST cache backend.
//!
//! Speaks the Upstash-style HTTP command protocol: `GET {base}/get/{key}`,
//! `POST {base}/set/{key}?EX={ttl}` with the value as the request body, and
//! `POST {base}/del/{key}`. Every request carries a bearer token.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::backend::{CacheBackend, CacheError};

/// Response envelope returned by the cache service.
#[derive(Debug, Deserialize)]
struct CommandResult {
    result: Option<serde_json::Value>,
}

/// Cache backend talking to an external HTTP key-value service.
pub struct RestCacheBackend {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestCacheBackend {
    /// Default per-request timeout. Slow cache lookups must not stall the
    /// request path; the layer treats a timeout as a miss.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

    /// Create a backend for the service at `base_url` (no trailing slash)
    /// authenticated with `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, CacheError> {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    fn command_url(&self, parts: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for part in parts {
            url.push('/');
            url.push_str(part);
        }
        url
    }
}

#[async_trait]
impl CacheBackend for RestCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let response = self
            .client
            .get(self.command_url(&["get", key]))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::UnexpectedStatus(status.as_u16()));
        }

        let body: CommandResult = response.json().await?;
        Ok(match body.result {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s),
            // Some deployments return the stored document unquoted.
            Some(other) => Some(other.to_string()),
        })
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let url = format!(
            "{}?EX={}",
            self.command_url(&["set", key]),
            ttl.as_secs().max(1)
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .body(value.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::UnexpectedStatus(status.as_u16()));
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let response = self
            .client
            .post(self.command_url(&["del", key]))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::UnexpectedStatus(status.as_u16()));
        }
        Ok(())
    }
}
