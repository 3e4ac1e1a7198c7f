use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use models::{Product, Project};
use service::{ProductCatalog, ProjectStore};

use crate::errors::ApiError;

/// Shared handler state: the startup-loaded catalog and the file-backed
/// project store.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProductCatalog>,
    pub projects: ProjectStore,
}

async fn root() -> &'static str {
    "Hello, World!"
}

async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    state
        .projects
        .list()
        .await
        .map(Json)
        .map_err(|e| ApiError::ProjectsRead(e.to_string()))
}

async fn like_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.projects.increment_likes(&id).await {
        Ok(Some(project)) => Ok(Json(serde_json::json!({
            "message": "Likes updated",
            "project": project,
        }))),
        Ok(None) => Err(ApiError::ProjectNotFound),
        Err(e) => Err(ApiError::LikesUpdate(e.to_string())),
    }
}

#[derive(Debug, Deserialize)]
struct ProductListParams {
    limit: Option<String>,
}

/// Anything that is not a positive integer means "no limit".
fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|v| v.parse::<usize>().ok()).filter(|&n| n > 0)
}

async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Json<Vec<Product>> {
    let limit = parse_limit(params.limit.as_deref());
    Json(state.catalog.list(limit).to_vec())
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    // Parse here instead of a typed Path extractor so a garbage id is a 404
    // like any other unknown product, not a 400.
    id.parse::<u32>()
        .ok()
        .and_then(|id| state.catalog.get(id).cloned())
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

async fn products_by_specialty(
    State(state): State<AppState>,
    Path(specialty): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let matches: Vec<Product> = state
        .catalog
        .by_specialty(&specialty)
        .into_iter()
        .cloned()
        .collect();
    if matches.is_empty() {
        return Err(ApiError::SpecialtyNotFound);
    }
    Ok(Json(matches))
}

/// Build the full application router. Unmatched paths fall through to the
/// framework default 404.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/projects", get(list_projects))
        .route("/projects/:id/likes", post(like_project))
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/products/specialty/:specialty", get(products_by_specialty))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
