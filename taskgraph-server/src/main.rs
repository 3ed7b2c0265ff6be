//! HTTP server exposing POST /validate for task graph structural validation.
//!
//! Configure via env: LISTEN (default 0.0.0.0:8080), RUST_LOG for the
//! tracing filter. Loads .env from the current directory first.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use taskgraph::{
    check_invariant_violations, Severity, TaskEdge, TaskGraph, TaskNode, ValidationError,
    ValidationErrorKind,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

/// Request body for POST /validate: the raw node and edge lists. Missing
/// keys default to empty lists; an empty graph is valid input and simply
/// fails the existence checks.
#[derive(Debug, Deserialize)]
struct ValidationRequest {
    #[serde(default)]
    nodes: Vec<TaskNode>,
    #[serde(default)]
    edges: Vec<TaskEdge>,
}

/// Response body: overall verdict plus the findings of the first failing
/// check (empty when valid).
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    errors: Vec<ApiError>,
}

/// One finding on the wire. `nodes` and `edges` are omitted when empty;
/// `message` and `severity` derive from the kind.
#[derive(Debug, Serialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: ValidationErrorKind,
    message: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nodes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    edges: Vec<TaskEdge>,
    severity: Severity,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            kind: err.kind,
            message: err.kind.message(),
            nodes: err.nodes,
            edges: err.edges,
            severity: err.kind.severity(),
        }
    }
}

/// Transport-level failure. The validation core never fails; the only
/// error this server produces itself is a body that does not deserialize.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("invalid JSON body: {0}")]
    BadRequest(#[from] JsonRejection),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let msg = self.to_string();
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": { "message": msg } })),
        )
            .into_response()
    }
}

/// POST /validate: build the graph, run the pipeline, and answer 200 for
/// every well-formed body; structural findings are payload, not HTTP
/// errors. Any rejection from the Json extractor maps to 400 (axum would
/// otherwise answer 422 for semantic deserialization failures).
async fn validate(
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, ServerError> {
    let Json(req) = payload?;
    tracing::debug!(
        nodes = req.nodes.len(),
        edges = req.edges.len(),
        "validate request"
    );
    let graph = TaskGraph::new(req.nodes, req.edges);
    let errors: Vec<ApiError> = check_invariant_violations(&graph)
        .into_iter()
        .map(ApiError::from)
        .collect();
    Ok(Json(ValidationResponse {
        valid: errors.is_empty(),
        errors,
    }))
}

fn app() -> Router {
    Router::new()
        .route("/validate", post(validate))
        .layer(
            TraceLayer::new_for_http().make_span_with(
                |req: &axum::http::Request<axum::body::Body>| {
                    info_span!("request", method = %req.method(), uri = %req.uri())
                },
            ),
        )
        .layer(CorsLayer::permissive())
}

/// Initializes tracing to stdout; filter from RUST_LOG when set.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,taskgraph_server=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let _ = dotenv::dotenv();
    init_tracing();

    let listen = std::env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!("listening on http://{}", listen);
    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app()).await?;
    Ok(())
}
