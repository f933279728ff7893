use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct DeleteRequest {
    pub public_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    /// Underlying error detail, present only on unexpected failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
