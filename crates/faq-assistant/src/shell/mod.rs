//! Page-level orchestration: screen the query, call the answer service, settle on a state.

mod state;

pub use state::{
    PendingQuery, Phase, RequestId, ShellEvent, ShellState, FALLBACK_ERROR_MESSAGE,
};

use tracing::{debug, warn};

use crate::client::AnswerService;

/// Drives `ShellState` through one submission at a time against an `AnswerService`.
pub struct Shell<S> {
    service: S,
    state: ShellState,
}

impl<S> Shell<S>
where
    S: AnswerService,
{
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: ShellState::default(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run the full pipeline for `query`. Flagged queries never reach the service.
    pub async fn submit(&mut self, query: impl Into<String>) -> &ShellState {
        self.state = self.state.reduce(ShellEvent::Submit {
            query: query.into(),
        });

        let Some(pending) = self.state.pending() else {
            debug!("query blocked by PII screen");
            return &self.state;
        };

        let event = match self.service.answer(&pending.query).await {
            Ok(response) => ShellEvent::Resolved {
                request: pending.request,
                response,
            },
            Err(err) => {
                warn!(error = %err, "answer service failed");
                ShellEvent::Failed {
                    request: pending.request,
                }
            }
        };

        self.state = self.state.reduce(event);
        &self.state
    }
}
