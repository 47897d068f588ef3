mod config;
mod metrics;
mod pipeline;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use classify::Classifier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use config::{AppConfig, LogFormat};
use metrics::{Metrics, MetricsSnapshot, TimedOperation};
use pipeline::GenerateResponse;

struct AppState {
    classifier: Classifier,
    config: AppConfig,
    metrics: Arc<Metrics>,
}

#[derive(Serialize)]
struct StatusResponse {
    status: String,
}

#[derive(Deserialize)]
struct GenerateRequest {
    description: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    init_tracing(config.log.format);

    let bind_addr = config.server.bind_addr.clone();
    let state = Arc::new(AppState {
        classifier: Classifier::default(),
        config,
        metrics: Metrics::new(),
    });

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!(addr = %bind_addr, "OmniArchitect server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/generate", post(generate_app))
        .route("/metrics", get(get_metrics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn read_root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "OmniArchitect Core Online".to_string(),
    })
}

async fn generate_app(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate", %request_id);

    span.in_scope(|| run_generate(&state, &req.description))
        .map(Json)
}

fn run_generate(state: &AppState, description: &str) -> Result<GenerateResponse, ApiError> {
    let timer = TimedOperation::start();

    match pipeline::generate(&state.classifier, description, &state.config.pipeline) {
        Ok(response) => {
            let stats = response.graph.graph_stats;
            state.metrics.record_request(true);
            state.metrics.record_generate(
                timer.elapsed(),
                &response.graph.template,
                stats.nodes,
                stats.edges,
            );

            tracing::info!(
                template = %response.graph.template,
                nodes = stats.nodes,
                edges = stats.edges,
                "Generated app architecture"
            );
            Ok(response)
        }
        Err(e) => {
            let detail = format!("{:#}", e);
            state.metrics.record_request(false);
            tracing::error!(error = %detail, "Generation failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { detail })))
        }
    }
}

async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
