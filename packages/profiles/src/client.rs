//! # `randomuser.me` HTTP client
//!
//! [`RandomUserClient`] is the live [`ProfileSource`]: one `GET <endpoint>?results=N`
//! per call, no authentication, no retries and no timeout beyond what the
//! platform HTTP stack imposes.
//!
//! The status is checked before the body is read, and the body is decoded with
//! `serde_json` rather than `Response::json` so a malformed payload surfaces as
//! [`FetchError::Decode`] instead of being folded into a transport error.

use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::{RandomUserPage, UserRecord};
use crate::source::ProfileSource;

/// HTTP-backed profile source.
#[derive(Clone, Debug)]
pub struct RandomUserClient {
    http: Client,
    endpoint: String,
}

impl RandomUserClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use an existing `reqwest` client (shared connection pool, custom headers).
    pub fn with_client(http: Client, config: &ApiConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PartialEq for RandomUserClient {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
    }
}

impl ProfileSource for RandomUserClient {
    async fn fetch_profiles(&self, results: u32) -> Result<Vec<UserRecord>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, results, "Requesting profiles");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("results", results)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let page: RandomUserPage = serde_json::from_slice(&body)?;

        Ok(page.results.into_iter().map(UserRecord::from).collect())
    }
}
