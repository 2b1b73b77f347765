//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::charts::plotly;
use crate::config::Config;
use crate::core::bootstrap::bootstrap;
use crate::core::dashboard::{update_charts, Dashboard};
use crate::error::DashboardError;
use crate::metrics::Metrics;
use crate::models::Symbol;
use crate::services::finra::FinraError;
use crate::services::{FinraClient, ShortVolumeProvider};

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub dashboard: Arc<Dashboard>,
    pub provider: Arc<dyn ShortVolumeProvider + Send + Sync>,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::InvalidSymbol(_) => StatusCode::BAD_REQUEST,
            DashboardError::Finra(FinraError::NoData(_)) => StatusCode::NOT_FOUND,
            DashboardError::Finra(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, status = %status, "Request failed");
        } else {
            warn!(error = %self, status = %status, "Request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub symbol: String,
    pub latest_day: String,
    pub pvo: Value,
    pub long_short: Value,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub day: String,
    pub figure: Value,
}

/// The server only starts after a successful bootstrap, so a reachable
/// server is healthy. The startup snapshot is reported alongside.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "shortvol-dashboard",
        "ranking_day": state.dashboard.ranking_day.format("%Y-%m-%d").to_string(),
        "choices": state.dashboard.choices.len()
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
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Dashboard page with the startup charts
async fn index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    Ok(Html(state.dashboard.render_page()?))
}

/// Dropdown callback: rebuild the oscillator and long/short charts for a symbol
async fn symbol_charts(
    State(state): State<AppState>,
    Path(raw_symbol): Path<String>,
) -> Result<Json<ChartsResponse>, DashboardError> {
    let symbol = Symbol::parse(&raw_symbol)?;
    let charts = update_charts(state.provider.as_ref(), &symbol).await?;

    Ok(Json(ChartsResponse {
        symbol: charts.symbol,
        latest_day: charts.latest_day,
        pvo: plotly::to_figure(&charts.pvo),
        long_short: plotly::to_figure(&charts.long_short),
    }))
}

/// Ranking chart as built at startup
async fn ranking(State(state): State<AppState>) -> Json<RankingResponse> {
    Json(RankingResponse {
        day: state.dashboard.ranking_day.format("%Y-%m-%d").to_string(),
        figure: plotly::to_figure(&state.dashboard.ranking_chart),
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/charts/{symbol}", get(symbol_charts))
        .route("/api/ranking", get(ranking))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
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

/// Bootstrap the dashboard against FINRA and serve it until the listener fails
pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    let provider: Arc<dyn ShortVolumeProvider + Send + Sync> = Arc::new(
        FinraClient::new(&config.finra_base_url).with_metrics(metrics.clone()),
    );
    let dashboard = bootstrap(provider.as_ref(), &config.default_symbol).await?;

    let state = AppState {
        metrics,
        start_time,
        dashboard: Arc::new(dashboard),
        provider,
    };
    let app = create_router(state);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Dashboard available at http://{}", addr);
    info!("Metrics endpoint available at http://{}/metrics", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
