use crate::config::constants;
use async_trait::async_trait;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to read response: {0}")]
    ResponseReadFailed(reqwest::Error),
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Store rejected the upload ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("System clock is before the Unix epoch")]
    ClockSkewed,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to read response: {0}")]
    ResponseReadFailed(reqwest::Error),
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Store rejected the deletion ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("System clock is before the Unix epoch")]
    ClockSkewed,
}

/// What the store hands back for a completed upload.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
    pub public_id: String,
}

/// Result code of a destroy call. Anything but the literal success marker
/// means the store refused or could not find the image.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub result: String,
}

impl DeleteOutcome {
    pub fn is_ok(&self) -> bool {
        self.result == constants::DELETE_SUCCESS_RESULT
    }
}

// Every remote media store the gateway can forward to implements this.
// Object-safe so handlers can share one `Arc<dyn MediaStore>` and tests can
// swap in a stub.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, file: &str, folder: &str) -> Result<StoredImage, UploadError>;
    async fn destroy(&self, public_id: &str) -> Result<DeleteOutcome, DeleteError>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_delete_outcome_ok() {
        let outcome = DeleteOutcome {
            result: "ok".to_string(),
        };
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_delete_outcome_not_found() {
        let outcome = DeleteOutcome {
            result: "not found".to_string(),
        };
        assert!(!outcome.is_ok());
    }
}
