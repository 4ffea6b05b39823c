// crates/blinkstake-api/src/docs.rs

//! OpenAPI document and the interactive explorer page.

use axum::{response::Html, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::rest::AppState;
use crate::stake_endpoints;
use crate::types::{
    ActionError, ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest,
    ActionPostResponse, LinkedAction,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "An API", version = "v1"),
    paths(
        stake_endpoints::get_stake_action,
        stake_endpoints::get_stake_action_with_amount,
        stake_endpoints::post_stake_action,
    ),
    components(schemas(
        ActionGetResponse,
        ActionLinks,
        LinkedAction,
        ActionParameter,
        ActionPostRequest,
        ActionPostResponse,
        ActionError,
    )),
    tags((name = "Stake", description = "Stake SOL action endpoints"))
)]
pub struct ApiDoc;

// Same shape the hono swagger-ui middleware renders: a static shell
// loading the swagger-ui bundle from a CDN, pointed at /doc.
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>SwaggerUI</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: '/doc',
        dom_id: '#swagger-ui',
      });
    };
  </script>
</body>
</html>
"#;

pub fn create_docs_router() -> Router<AppState> {
    Router::new()
        .route("/doc", get(openapi_doc))
        .route("/swagger-ui", get(swagger_ui))
}

async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_stake_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/api/everstake/stake".to_string()));
        assert!(paths.contains(&"/api/everstake/stake/{amount}".to_string()));
    }
}
