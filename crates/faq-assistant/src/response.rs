use serde::{Deserialize, Serialize};

/// Body posted to `/api/query`, both by the terminal client and by the proxy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// Outcome tag reported by the answering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
    NoMatch,
    Refusal,
}

/// Failure categories surfaced to users with a fixed, infrastructure-free message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    MethodNotAllowed,
    NetworkError,
    ServerError,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::NetworkError => "network_error",
            Self::ServerError => "server_error",
        }
    }

    pub const fn user_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Query is required",
            Self::MethodNotAllowed => "Method not allowed",
            Self::NetworkError => "Failed to connect to the server. Please try again later.",
            Self::ServerError => {
                "An error occurred while processing your query. Please try again."
            }
        }
    }
}

/// Answering-service reply. Fields are optional on the wire; which ones are present depends on
/// `status`. The shape is relayed as received, so no cross-field validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_q_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl FaqResponse {
    fn with_status(status: ResponseStatus) -> Self {
        Self {
            status,
            answer: None,
            source: None,
            last_updated: None,
            error_type: None,
            message: None,
            matched_q_key: None,
            similarity: None,
        }
    }

    pub fn success(
        answer: impl Into<String>,
        source: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            answer: Some(answer.into()),
            source: Some(source.into()),
            last_updated: Some(last_updated.into()),
            ..Self::with_status(ResponseStatus::Success)
        }
    }

    pub fn refusal(message: impl Into<String>, source: Option<String>) -> Self {
        Self {
            message: Some(message.into()),
            source,
            ..Self::with_status(ResponseStatus::Refusal)
        }
    }

    pub fn no_match(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::with_status(ResponseStatus::NoMatch)
        }
    }

    /// Error reply carrying the fixed message for `kind`.
    pub fn error(kind: ErrorKind) -> Self {
        Self {
            error_type: Some(kind.as_str().to_string()),
            message: Some(kind.user_message().to_string()),
            ..Self::with_status(ResponseStatus::Error)
        }
    }

    /// The answer text, when it is present and not blank.
    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|answer| !answer.is_empty())
    }

    pub fn is_error_kind(&self, kind: ErrorKind) -> bool {
        self.status == ResponseStatus::Error && self.error_type.as_deref() == Some(kind.as_str())
    }
}
