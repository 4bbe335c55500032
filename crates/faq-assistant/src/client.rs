//! Terminal-side client for the proxy's `/api/query` endpoint.

use std::future::Future;

use tracing::error;

use crate::response::{ErrorKind, FaqResponse, QueryRequest};
use crate::APP_USER_AGENT;

/// What the presentation shell calls to resolve a screened query.
pub trait AnswerService: Send + Sync {
    fn answer(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<FaqResponse, AnswerError>> + Send;
}

/// Failure raised by an `AnswerService` that does not normalize its own errors.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("answer transport failed: {0}")]
    Transport(String),
    #[error("answer body could not be parsed: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
enum AskFailure {
    #[error("request failed: {0}")]
    Send(#[source] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Posts queries to `<origin>/api/query`. Every failure comes back as a `network_error`
/// response; callers never see a transport error.
#[derive(Debug, Clone)]
pub struct AnswerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnswerClient {
    pub fn new(origin: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;
        Ok(Self::with_client(http, origin))
    }

    pub fn with_client(http: reqwest::Client, origin: &str) -> Self {
        let endpoint = format!("{}/api/query", origin.trim_end_matches('/'));
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn ask(&self, query: &str) -> FaqResponse {
        match self.try_ask(query).await {
            Ok(response) => response,
            Err(err) => {
                error!(endpoint = %self.endpoint, error = %err, "error querying FAQ");
                FaqResponse::error(ErrorKind::NetworkError)
            }
        }
    }

    async fn try_ask(&self, query: &str) -> Result<FaqResponse, AskFailure> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(AskFailure::Send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AskFailure::Status(status.as_u16()));
        }

        response
            .json::<FaqResponse>()
            .await
            .map_err(AskFailure::Body)
    }
}

impl AnswerService for AnswerClient {
    async fn answer(&self, query: &str) -> Result<FaqResponse, AnswerError> {
        Ok(self.ask(query).await)
    }
}
