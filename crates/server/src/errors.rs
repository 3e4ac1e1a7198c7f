use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Handler-level outcomes that are not a plain 200.
///
/// Each variant pins the exact status and JSON body the route contract
/// promises; storage failures collapse to generic 500 bodies and the detail
/// only goes to the log (except the projects listing, which echoes it).
#[derive(Debug)]
pub enum ApiError {
    ProductNotFound,
    SpecialtyNotFound,
    ProjectNotFound,
    ProjectsRead(String),
    LikesUpdate(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Product not found"})),
            )
                .into_response(),
            ApiError::SpecialtyNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "No products found with the given specialty"})),
            )
                .into_response(),
            ApiError::ProjectNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Project not found"})),
            )
                .into_response(),
            ApiError::ProjectsRead(detail) => {
                error!(error = %detail, "failed to read projects");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "Error reading projects file", "error": detail})),
                )
                    .into_response()
            }
            ApiError::LikesUpdate(detail) => {
                error!(error = %detail, "failed to update likes");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Unable to update likes"})),
                )
                    .into_response()
            }
        }
    }
}
