use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body for validation and upload failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> ErrorBody {
        ErrorBody {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> ErrorBody {
        ErrorBody {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
