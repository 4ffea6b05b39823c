// crates/blinkstake-api/src/rest.rs

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{header, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use blinkstake_common::ServiceConfig;
use blinkstake_staking::{Cluster, SolanaRpcClient};

use crate::docs::create_docs_router;
use crate::stake_endpoints::create_stake_router;
use crate::static_endpoints::create_static_router;
use crate::types::{HealthResponse, HealthStatus, StatusResponse};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<ServiceConfig>,
    /// JSON-RPC connection to the Solana node, reused across requests
    pub rpc: Arc<SolanaRpcClient>,
    /// Application start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        let rpc_url = config
            .rpc_url
            .clone()
            .unwrap_or_else(|| Cluster::MainnetBeta.url().to_string());

        Self {
            config: Arc::new(config),
            rpc: Arc::new(SolanaRpcClient::new(rpc_url)),
            start_time: Instant::now(),
        }
    }
}

/// API server
pub struct ApiServer {
    /// Server configuration
    config: ServiceConfig,
}

impl ApiServer {
    /// Create a new API server with the given configuration
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Start the API server
    pub async fn start(&self) -> anyhow::Result<()> {
        tracing::info!(
            "Starting stake action API server on {}",
            self.config.bind_addr
        );

        let state = AppState::new(self.config.clone());
        let router = create_router(state);

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(
            "Listening on {} - visit /swagger-ui to explore the actions, \
             or https://actions.dialect.to to unfurl one into a Blink",
            self.config.bind_addr
        );

        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT_ENCODING,
            header::AUTHORIZATION,
        ])
        .allow_origin(Any)
        .max_age(Duration::from_secs(600));

    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .merge(create_static_router())
        .merge(create_docs_router())
        .nest(&state.config.path_prefix, create_stake_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        uptime: state.start_time.elapsed().as_secs(),
    })
}

/// Status handler
async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_reports_healthy() {
        let router = create_router(AppState::new(ServiceConfig::default()));
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn status_names_the_service() {
        let router = create_router(AppState::new(ServiceConfig::default()));
        let response = router
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["name"], "blinkstake-api");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
