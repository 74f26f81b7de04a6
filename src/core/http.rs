//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::core::analyzer::Analyzer;
use crate::error::AnalyzeError;
use crate::metrics::Metrics;
use crate::models::AnalysisRequest;
use crate::services::coingecko::CoinGeckoClient;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub default_days: u32,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "coinsignal"
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    currency: Option<String>,
    days: Option<u32>,
    #[serde(default)]
    forecast: bool,
}

pub struct ApiError(AnalyzeError);

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            AnalyzeError::MissingAsset | AnalyzeError::InvalidWindow => StatusCode::BAD_REQUEST,
            AnalyzeError::HistoryUnavailable(_) | AnalyzeError::CurrentPriceUnavailable(_) => {
                StatusCode::BAD_GATEWAY
            }
            AnalyzeError::Analysis(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Analyze one asset against its recent price history
async fn analyze_asset(
    State(state): State<AppState>,
    Path(asset): Path<String>,
    Query(params): Query<AnalysisQuery>,
) -> Result<Json<Value>, ApiError> {
    let request = AnalysisRequest::new(
        asset,
        params.currency.unwrap_or_default(),
        params.days.unwrap_or(state.default_days),
    )
    .with_forecast(params.forecast);

    match state.analyzer.analyze(&request).await {
        Ok(report) => {
            state.metrics.record_analysis(report.signal);
            Ok(Json(json!(report)))
        }
        Err(e) => {
            if matches!(
                e,
                AnalyzeError::HistoryUnavailable(_) | AnalyzeError::CurrentPriceUnavailable(_)
            ) {
                state.metrics.upstream_errors_total.inc();
            }
            error!(asset = %request.asset, error = %e, "analysis failed");
            Err(e.into())
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analysis/{asset}", get(analyze_asset))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let source = Arc::new(CoinGeckoClient::new(&config)?);
    let analyzer = Arc::new(Analyzer::new(source, config.default_currency.clone()));

    let state = AppState {
        analyzer,
        metrics,
        start_time: Arc::new(Instant::now()),
        default_days: config.default_days,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
