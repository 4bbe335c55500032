//! Outbound leg of the proxy: forwards screened queries to the external answering service.

use std::future::Future;

use serde_json::Value;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::response::QueryRequest;
use crate::APP_USER_AGENT;

/// Seam between the proxy router and the answering service so routes can be exercised
/// without a live backend.
pub trait UpstreamGateway: Send + Sync {
    /// Forward `query` and return the upstream JSON body untouched.
    fn forward(&self, query: &str) -> impl Future<Output = Result<Value, UpstreamError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream returned HTTP {status}")]
    Status { status: u16, body: String },
    #[error("upstream body is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// `reqwest`-backed gateway posting to `<base>/api/query`.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            endpoint: config.query_endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl UpstreamGateway for HttpUpstream {
    async fn forward(&self, query: &str) -> Result<Value, UpstreamError> {
        debug!(endpoint = %self.endpoint, "forwarding query upstream");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(UpstreamError::Decode)
    }
}
