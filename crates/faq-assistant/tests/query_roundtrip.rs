//! End-to-end scenarios: terminal client -> proxy -> stub answering service, all over real
//! loopback HTTP.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use faq_assistant::client::AnswerClient;
use faq_assistant::config::UpstreamConfig;
use faq_assistant::proxy::query_router;
use faq_assistant::response::{ErrorKind, ResponseStatus};
use faq_assistant::shell::{Phase, Shell};
use faq_assistant::upstream::HttpUpstream;

#[derive(Clone, Default)]
struct AnsweringService {
    hits: Arc<AtomicUsize>,
}

async fn answer(State(service): State<AnsweringService>, Json(body): Json<Value>) -> Response {
    service.hits.fetch_add(1, Ordering::SeqCst);
    let query = body["query"].as_str().unwrap_or_default().to_lowercase();

    if query.contains("crash") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Traceback: KeyError 'faqs'").into_response();
    }

    let payload = if query.contains("should i") {
        json!({
            "status": "refusal",
            "message": "I can only provide factual information, not investment advice.",
            "source": "https://www.amfiindia.com/investor-corner/knowledge-center",
        })
    } else if query.contains("expense ratio") {
        json!({
            "status": "success",
            "answer": "The expense ratio of SBI Bluechip Fund (Direct Plan) is 0.85%.",
            "source": "https://www.sbimf.com/en-us/equity-schemes/sbi-bluechip-fund",
            "last_updated": "2025-01-15",
            "matched_q_key": "expense_ratio_bluechip",
            "similarity": 0.91,
        })
    } else {
        json!({
            "status": "no_match",
            "message": "I couldn't find an answer to that question in the FAQ.",
        })
    };

    Json(payload).into_response()
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server runs");
    });
    format!("http://{addr}")
}

/// Start the stub answering service and a proxy in front of it; returns the proxy origin.
async fn start_stack(service: AnsweringService) -> String {
    let upstream_base = serve(
        Router::new()
            .route("/api/query", post(answer))
            .with_state(service),
    )
    .await;

    let config = UpstreamConfig::new(upstream_base).expect("valid upstream");
    let upstream = Arc::new(HttpUpstream::new(&config).expect("upstream client"));
    serve(query_router(upstream)).await
}

#[tokio::test]
async fn success_flows_through_proxy_to_result_state() {
    let service = AnsweringService::default();
    let origin = start_stack(service.clone()).await;
    let mut shell = Shell::new(AnswerClient::new(&origin).expect("client"));

    let state = shell
        .submit("What is the expense ratio of SBI Bluechip Fund?")
        .await;

    assert_eq!(state.phase(), Phase::DisplayingSuccess);
    let response = state.response().expect("response kept");
    assert_eq!(
        response.answer_text(),
        Some("The expense ratio of SBI Bluechip Fund (Direct Plan) is 0.85%.")
    );
    assert_eq!(response.matched_q_key.as_deref(), Some("expense_ratio_bluechip"));
    assert_eq!(service.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn refusal_and_no_match_reach_their_states() {
    let origin = start_stack(AnsweringService::default()).await;
    let mut shell = Shell::new(AnswerClient::new(&origin).expect("client"));

    let refusal = shell.submit("Should I buy SBI Small Cap Fund?").await;
    assert_eq!(refusal.phase(), Phase::DisplayingRefusal);
    assert!(refusal.error().is_none());

    let no_match = shell.submit("Who manages the gold ETF?").await;
    assert_eq!(no_match.phase(), Phase::DisplayingNoMatch);
    assert_eq!(
        no_match.response().map(|response| response.status),
        Some(ResponseStatus::NoMatch)
    );
}

#[tokio::test]
async fn flagged_query_never_leaves_the_client() {
    let service = AnsweringService::default();
    let origin = start_stack(service.clone()).await;
    let mut shell = Shell::new(AnswerClient::new(&origin).expect("client"));

    let state = shell.submit("My PAN is ABCDE1234F, what is my NAV?").await;

    assert_eq!(state.phase(), Phase::DisplayingError);
    assert!(state
        .error()
        .is_some_and(|error| error.starts_with("Personal information detected: PAN.")));
    assert_eq!(service.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_crash_surfaces_as_network_error_in_client() {
    let origin = start_stack(AnsweringService::default()).await;
    let client = AnswerClient::new(&origin).expect("client");

    let response = client.ask("crash the service").await;

    assert!(response.is_error_kind(ErrorKind::NetworkError));
    assert!(!format!("{response:?}").contains("Traceback"));
}

#[tokio::test]
async fn proxy_rejects_get_with_405() {
    let origin = start_stack(AnsweringService::default()).await;

    let response = reqwest::get(format!("{origin}/api/query"))
        .await
        .expect("proxy reachable");

    assert_eq!(response.status().as_u16(), 405);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["error_type"], json!("method_not_allowed"));
}
