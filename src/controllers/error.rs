use crate::models::delete_dto::DeleteResponse;
use crate::models::error_dto::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Everything a request can fail with at the handler boundary. Each variant
/// renders its own JSON body; no error leaves without one.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("No file provided")]
    MissingFile,
    #[error("Missing public_id in request body")]
    MissingPublicId,
    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),
    #[error("Image upload failed: {0}")]
    UploadFailed(String),
    #[error("Failed to delete image {public_id}: {code}")]
    DeleteRejected { public_id: String, code: String },
    #[error("Internal server error during image deletion: {0}")]
    DeleteFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorBody::new("Method Not Allowed")),
            )
                .into_response(),
            ApiError::MissingFile => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("No file provided")),
            )
                .into_response(),
            ApiError::MissingPublicId => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new("Missing public_id in request body")),
            )
                .into_response(),
            ApiError::InvalidPayload(reason) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::with_details("Invalid image payload", reason)),
            )
                .into_response(),
            ApiError::UploadFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details("Image upload failed", details)),
            )
                .into_response(),
            ApiError::DeleteRejected { public_id, code } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteResponse {
                    success: false,
                    message: format!("Failed to delete image {public_id}: {code}"),
                    error: None,
                }),
            )
                .into_response(),
            ApiError::DeleteFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteResponse {
                    success: false,
                    message: "Internal server error during image deletion.".to_string(),
                    error: Some(details),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn test_delete_rejected_names_the_code() {
        let response = ApiError::DeleteRejected {
            public_id: "offers/123".to_string(),
            code: "not found".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Failed to delete image offers/123: not found");
    }

    #[tokio::test]
    async fn test_upload_failed_carries_details() {
        let response = ApiError::UploadFailed("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Image upload failed");
        assert_eq!(json["details"], "connection reset");
    }
}
