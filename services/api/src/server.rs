use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_query_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use faq_assistant::config::{AppConfig, UpstreamConfig};
use faq_assistant::error::AppError;
use faq_assistant::telemetry;
use faq_assistant::upstream::HttpUpstream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(upstream) = args.upstream.take() {
        config.upstream = UpstreamConfig::new(upstream)?;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let upstream = Arc::new(HttpUpstream::new(&config.upstream)?);

    let app = with_query_routes(upstream)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        upstream = %config.upstream.base_url(),
        "faq query proxy ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
