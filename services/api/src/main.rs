mod analyze;
mod error;
mod extractors;
mod gemini;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, get_service},
    Json, Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use veracity_analysis::{Analyzer, SharedCompletionClient, VerdictThresholds};
use veracity_common::types::ServiceInfo;
use veracity_config::{init_tracing, AppConfig};

use crate::gemini::client::{GeminiClient, GeminiClientConfig};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer<SharedCompletionClient>>,
}

impl AppState {
    pub fn new(client: SharedCompletionClient) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new(client, VerdictThresholds::default())),
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("veracity-api"))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

fn build_router(state: AppState, config: &AppConfig) -> Router {
    let static_dir = Path::new(&config.static_dir);
    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route("/", get_service(index))
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(analyze::router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.cors_allowed_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = "veracity-api", "starting");

    let gemini_config = GeminiClientConfig::from_env().expect("failed to load gemini config");
    tracing::info!(model = %gemini_config.model, "gemini client configured");
    let client = GeminiClient::new(gemini_config).expect("failed to create gemini client");

    let state = AppState::new(Arc::new(client));
    let app = build_router(state, &config);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, static_dir = %config.static_dir, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
