use crate::config::constants;
use crate::controllers::error::ApiError;
use crate::models::delete_dto::{DeleteRequest, DeleteResponse};
use crate::models::error_dto::ErrorBody;
use crate::models::upload_dto::{UploadRequest, UploadResponse};
use crate::routes::router::AppState;
use crate::utils::payload::validate_data_uri;
use axum::extract::{Json, State};
use tracing::error;

#[utoipa::path(
    post,
    path = "/api/upload-cloudinary-image",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing or invalid file", body = ErrorBody),
        (status = 405, description = "Wrong HTTP method", body = ErrorBody),
        (status = 500, description = "Upload failed", body = ErrorBody)
    ),
    tag = "media"
)]
pub async fn upload(
    State(state): State<AppState>,
    Json(body): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, ApiError> {
    let file = match body.file.as_deref() {
        Some(f) if !f.is_empty() => f,
        _ => return Err(ApiError::MissingFile),
    };

    if state.config.strict_payloads {
        validate_data_uri(file).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
    }

    match state.store.upload(file, constants::UPLOAD_FOLDER).await {
        Ok(stored) => Ok(Json(UploadResponse {
            url: stored.url,
            public_id: stored.public_id,
        })),
        Err(e) => {
            error!("Cloudinary upload error: {}", e);
            Err(ApiError::UploadFailed(e.to_string()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/delete-cloudinary-image",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "Image deleted", body = DeleteResponse),
        (status = 400, description = "Missing public_id", body = ErrorBody),
        (status = 405, description = "Wrong HTTP method", body = ErrorBody),
        (status = 500, description = "Deletion failed", body = DeleteResponse)
    ),
    tag = "media"
)]
pub async fn delete(
    State(state): State<AppState>,
    Json(body): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let public_id = match body.public_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::MissingPublicId),
    };

    match state.store.destroy(public_id).await {
        Ok(outcome) if outcome.is_ok() => Ok(Json(DeleteResponse {
            success: true,
            message: format!("Image {public_id} deleted successfully."),
            error: None,
        })),
        Ok(outcome) => Err(ApiError::DeleteRejected {
            public_id: public_id.to_string(),
            code: outcome.result,
        }),
        Err(e) => {
            error!("Error deleting image from Cloudinary: {}", e);
            Err(ApiError::DeleteFailed(e.to_string()))
        }
    }
}

/// Route-level fallback so non-POST verbs get the JSON 405 body instead of
/// axum's empty default.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
