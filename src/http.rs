// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::HttpError;

const USER_AGENT: &str = concat!("podhome/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client abstraction for testability
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch the entire response body as bytes.
    ///
    /// A non-success status is an error; callers never see partial bodies.
    async fn get_bytes(&self, url: &str) -> Result<Bytes, HttpError>;
}

/// Default HTTP client implementation using reqwest
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with the crate user agent and a request timeout
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Create a ReqwestClient around a custom reqwest::Client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_bytes(&self, url: &str) -> Result<Bytes, HttpError> {
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| HttpError::RequestFailed {
                    url: url.to_string(),
                    source: e,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(|e| HttpError::RequestFailed {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reqwest_client_can_be_created() {
        let _client = ReqwestClient::new();
        let _client_default = ReqwestClient::default();
    }

    #[test]
    fn status_error_carries_url_and_code() {
        let err = HttpError::Status {
            url: "http://localhost:3333/episodes".to_string(),
            status: 503,
        };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("http://localhost:3333/episodes"));
    }
}
