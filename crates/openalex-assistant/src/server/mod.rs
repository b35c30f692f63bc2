//! HTTP API adapter.
//!
//! Three endpoints over the shared pipeline. This layer owns only
//! request/response shaping and the error-to-status mapping; every decision
//! about the query's journey lives in [`crate::pipeline`].

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::limits;
use crate::error::PipelineError;
use crate::formatters;
use crate::pipeline::ResearchPipeline;

/// Shared state for HTTP handlers.
pub struct AppState {
    /// The research pipeline shared by all requests.
    pub pipeline: ResearchPipeline,
}

/// Request body for the research and keywords endpoints.
#[derive(Debug, Deserialize)]
pub struct QueryBody {
    /// The research question.
    #[serde(default)]
    pub query: String,
}

/// Create the API router with CORS and request tracing.
pub fn create_router(pipeline: ResearchPipeline) -> Router {
    let state = Arc::new(AppState { pipeline });

    Router::new()
        .route("/api/research", post(handle_research))
        .route("/api/health", get(handle_health))
        .route("/api/keywords", post(handle_keywords))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns error on bind or server failure.
pub async fn run_http(pipeline: ResearchPipeline, port: u16) -> anyhow::Result<()> {
    let router = create_router(pipeline);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("HTTP server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}

/// Full pipeline: keywords, search, per-work projection, summary.
async fn handle_research(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryBody>,
) -> Response {
    match state.pipeline.run(&body.query, limits::PER_PAGE_API).await {
        Ok(outcome) => {
            let papers: Vec<_> = outcome
                .works
                .iter()
                .map(|work| formatters::work_view(work, limits::ABSTRACT_WORDS_API))
                .collect();

            Json(json!({
                "query": outcome.query,
                "keywords": outcome.keywords,
                "papers": papers,
                "summary": outcome.summary,
                "total_results": papers.len(),
            }))
            .into_response()
        }
        Err(err) => error_response(&err),
    }
}

async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "api_key_configured": state.pipeline.has_api_key(),
    }))
}

/// Keyword extraction only, without the search and synthesis steps.
async fn handle_keywords(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QueryBody>,
) -> Response {
    let query = body.query.trim();
    if query.is_empty() {
        return error_response(&PipelineError::validation("Query is required"));
    }

    match state.pipeline.extract_keywords(query).await {
        Ok(keywords) => Json(json!({ "keywords": keywords })).into_response(),
        Err(err) => {
            error_body(StatusCode::BAD_GATEWAY, format!("Keyword extraction failed: {err}"))
        }
    }
}

/// Map pipeline errors onto the API's status taxonomy.
fn error_response(err: &PipelineError) -> Response {
    match err {
        PipelineError::Validation { message } => error_body(StatusCode::BAD_REQUEST, message.clone()),
        PipelineError::Client(client_err) => {
            error_body(StatusCode::BAD_GATEWAY, format!("Research failed: {client_err}"))
        }
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    if status.is_server_error() {
        tracing::error!(error = %message, "request failed");
    } else {
        tracing::debug!(error = %message, "request rejected");
    }

    (status, Json(json!({ "error": message }))).into_response()
}
