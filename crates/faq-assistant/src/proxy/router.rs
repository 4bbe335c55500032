use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tracing::{error, info};

use super::ProxyRejection;
use crate::upstream::UpstreamGateway;

pub const QUERY_PATH: &str = "/api/query";

/// Router exposing the query relay. Every verb other than POST is rejected with 405.
pub fn query_router<U>(upstream: Arc<U>) -> Router
where
    U: UpstreamGateway + 'static,
{
    Router::new()
        .route(
            QUERY_PATH,
            post(query_handler::<U>).fallback(method_not_allowed),
        )
        .with_state(upstream)
}

/// Pull a non-empty string `query` out of a JSON object body.
fn extract_query(body: &[u8]) -> Option<String> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    payload
        .get("query")
        .and_then(Value::as_str)
        .filter(|query| !query.is_empty())
        .map(str::to_owned)
}

pub(crate) async fn query_handler<U>(State(upstream): State<Arc<U>>, body: Bytes) -> Response
where
    U: UpstreamGateway + 'static,
{
    let Some(query) = extract_query(&body) else {
        return ProxyRejection::InvalidRequest.into_response();
    };

    match upstream.forward(&query).await {
        Ok(payload) => {
            info!("relayed FAQ query");
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            error!(error = ?err, "error processing FAQ query");
            ProxyRejection::ServerError.into_response()
        }
    }
}

pub(crate) async fn method_not_allowed() -> Response {
    ProxyRejection::MethodNotAllowed.into_response()
}
