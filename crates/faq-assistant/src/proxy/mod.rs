//! Inbound `/api/query` endpoint relaying browser-style queries to the answering service.

pub mod router;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::{ErrorKind, FaqResponse};

pub use router::{query_router, QUERY_PATH};

/// Requests the proxy answers itself without a useful upstream reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyRejection {
    MethodNotAllowed,
    InvalidRequest,
    ServerError,
}

impl ProxyRejection {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            Self::InvalidRequest => ErrorKind::InvalidRequest,
            Self::ServerError => ErrorKind::ServerError,
        }
    }

    pub const fn status(self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyRejection {
    fn into_response(self) -> Response {
        let body = Json(FaqResponse::error(self.kind()));
        match self {
            Self::MethodNotAllowed => {
                (self.status(), [(header::ALLOW, "POST")], body).into_response()
            }
            Self::InvalidRequest | Self::ServerError => (self.status(), body).into_response(),
        }
    }
}
