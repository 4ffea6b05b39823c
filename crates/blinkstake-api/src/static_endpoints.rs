// crates/blinkstake-api/src/static_endpoints.rs

//! Static asset passthrough: the action icon and the actions.json rules
//! file wallets fetch before unfurling a Blink.

use std::path::Path as FsPath;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::rest::AppState;
use crate::types::ApiError;

pub fn create_static_router() -> Router<AppState> {
    Router::new()
        .route("/actions.json", get(get_actions_json))
        .route("/static/:file", get(get_static_file))
}

async fn get_actions_json(State(state): State<AppState>) -> Result<Response, ApiError> {
    load_file(&state.config.static_dir, "actions.json").await
}

async fn get_static_file(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, ApiError> {
    load_file(&state.config.static_dir, &file).await
}

/// Reads `file` from the static directory and replies with its bytes and
/// guessed content type. Only bare file names resolve; anything that
/// could step out of the directory is treated as absent.
async fn load_file(dir: &FsPath, file: &str) -> Result<Response, ApiError> {
    if file.contains("..") || file.contains('/') || file.contains('\\') {
        return Err(ApiError::NotFound(format!("no such file: {}", file)));
    }

    let path = dir.join(file);
    let payload = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::NotFound(format!("no such file: {}", file)))?;

    let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime_type.as_ref())], payload).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use blinkstake_common::ServiceConfig;
    use tower::ServiceExt;

    fn router_with_static_dir(dir: &FsPath) -> Router {
        let config = ServiceConfig {
            static_dir: dir.to_path_buf(),
            ..ServiceConfig::default()
        };
        create_static_router().with_state(crate::rest::AppState::new(config))
    }

    #[tokio::test]
    async fn actions_json_is_served_with_its_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("actions.json"), r#"{"rules":[]}"#).unwrap();

        let router = router_with_static_dir(dir.path());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/actions.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn missing_file_is_a_404_not_a_crash() {
        let dir = tempfile::tempdir().unwrap();
        let router = router_with_static_dir(dir.path());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/static/missing.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn parent_directory_segments_never_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let router = router_with_static_dir(dir.path());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/static/..%2Fsecret.txt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
