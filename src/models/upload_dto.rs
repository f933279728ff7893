use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// `file` stays optional so the handler, not the extractor, owns the
// missing-field response.
#[derive(Deserialize, ToSchema)]
pub struct UploadRequest {
    /// Encoded image payload, e.g. a base64 `data:image/png` URI.
    pub file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Store-assigned delivery URL.
    pub url: String,
    /// Store-assigned identifier, used for later deletion.
    pub public_id: String,
}
