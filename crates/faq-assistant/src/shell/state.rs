use crate::pii;
use crate::response::{FaqResponse, ResponseStatus};

/// Shown when the answer service itself fails instead of returning a normalized reply.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "An error occurred while processing your query. Please try again.";

/// Monotonic submission counter; only the latest id may resolve the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    DisplayingSuccess,
    DisplayingRefusal,
    DisplayingNoMatch,
    DisplayingError,
}

impl Phase {
    fn for_status(status: ResponseStatus) -> Self {
        match status {
            ResponseStatus::Success => Self::DisplayingSuccess,
            ResponseStatus::Refusal => Self::DisplayingRefusal,
            ResponseStatus::NoMatch => Self::DisplayingNoMatch,
            ResponseStatus::Error => Self::DisplayingError,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Submit {
        query: String,
    },
    Resolved {
        request: RequestId,
        response: FaqResponse,
    },
    Failed {
        request: RequestId,
    },
}

/// A query waiting on the answer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub request: RequestId,
    pub query: String,
}

/// Immutable snapshot of the page: what was asked, where the machine is, and what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    phase: Phase,
    query: String,
    response: Option<FaqResponse>,
    error: Option<String>,
    latest: RequestId,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            query: String::new(),
            response: None,
            error: None,
            latest: RequestId::default(),
        }
    }
}

impl ShellState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn response(&self) -> Option<&FaqResponse> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest
    }

    /// The query the service must answer, if the last submission passed screening.
    pub fn pending(&self) -> Option<PendingQuery> {
        (self.phase == Phase::Submitting).then(|| PendingQuery {
            request: self.latest,
            query: self.query.clone(),
        })
    }

    pub fn reduce(&self, event: ShellEvent) -> ShellState {
        match event {
            ShellEvent::Submit { query } => self.submitted(query),
            ShellEvent::Resolved { request, response } if request == self.latest => {
                self.resolved(response)
            }
            ShellEvent::Failed { request } if request == self.latest => self.failed(),
            ShellEvent::Resolved { .. } | ShellEvent::Failed { .. } => self.clone(),
        }
    }

    fn submitted(&self, query: String) -> ShellState {
        let latest = self.latest.next();
        let verdict = pii::detect(&query);

        if verdict.has_pii {
            let message = verdict
                .message
                .unwrap_or_else(|| "Personal information detected".to_string());
            return ShellState {
                phase: Phase::DisplayingError,
                query,
                response: None,
                error: Some(message),
                latest,
            };
        }

        ShellState {
            phase: Phase::Submitting,
            query,
            response: None,
            error: None,
            latest,
        }
    }

    fn resolved(&self, response: FaqResponse) -> ShellState {
        let error = match response.status {
            ResponseStatus::Error => response.message.clone(),
            _ => None,
        };

        ShellState {
            phase: Phase::for_status(response.status),
            query: self.query.clone(),
            response: Some(response),
            error,
            latest: self.latest,
        }
    }

    fn failed(&self) -> ShellState {
        ShellState {
            phase: Phase::DisplayingError,
            query: self.query.clone(),
            response: None,
            error: Some(FALLBACK_ERROR_MESSAGE.to_string()),
            latest: self.latest,
        }
    }
}
