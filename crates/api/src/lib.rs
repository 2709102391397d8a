mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Json, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use superagent_agents::RoutingAgent;
use superagent_core::AgentReply;
use superagent_observability::{AppMetrics, MetricsSnapshot};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::{AllowedOrigins, ApiConfig};

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<RoutingAgent>,
    pub metrics: Arc<AppMetrics>,
}

#[derive(Debug, Deserialize)]
struct AiRequest {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
}

pub fn build_app(config: &ApiConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let agent = Arc::new(RoutingAgent::new(metrics.clone()));

    let cors = build_cors_layer(&config.allowed_origins)?;
    let state = ApiState { agent, metrics };

    Ok(build_router(state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes)))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ai", post(ai))
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "SuperAgent backend running"
    }))
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn ai(State(state): State<ApiState>, Json(request): Json<AiRequest>) -> Json<AgentReply> {
    let text = request.text.unwrap_or_default();
    Json(state.agent.handle_query(&text))
}

fn build_cors_layer(allowed_origins: &AllowedOrigins) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match allowed_origins {
        AllowedOrigins::Any => Ok(layer.allow_origin(Any)),
        AllowedOrigins::List(origins) => {
            let origins = origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("invalid allowed origin: {origin}"))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(layer.allow_origin(AllowOrigin::list(origins)))
        }
    }
}
