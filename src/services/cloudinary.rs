use crate::config::constants;
use crate::config::loader::Config;
use crate::services::media_store::{
    DeleteError, DeleteOutcome, MediaStore, StoredImage, UploadError,
};
use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

//-------------------------
// cloudinary
//-------------------------
pub struct CloudinaryStore {
    client: reqwest::Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(serde::Deserialize, Debug)]
struct CloudinaryUploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(serde::Deserialize, Debug)]
struct CloudinaryDeleteResponse {
    result: String,
}

#[derive(serde::Deserialize, Debug)]
struct CloudinaryErrorResponse {
    error: CloudinaryErrorDetail,
}

#[derive(serde::Deserialize, Debug)]
struct CloudinaryErrorDetail {
    message: String,
}

impl CloudinaryStore {
    pub fn new(config: &Config) -> CloudinaryStore {
        CloudinaryStore {
            client: reqwest::Client::new(),
            base_url: constants::CLOUDINARY_API_BASE.to_string(),
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> CloudinaryStore {
        self.base_url = base_url;
        self
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/{}/image/{}", self.base_url, self.cloud_name, operation)
    }
}

// Cloudinary authenticates each call with a digest over the alphabetically
// ordered `k=v` pairs (excluding `file`, `api_key` and the algorithm field)
// with the API secret appended.
fn sign_request(params_to_sign: &str, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(params_to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

fn unix_timestamp() -> Option<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs())
}

// Error payloads look like {"error": {"message": "..."}}; fall back to the
// raw body when the shape does not match.
async fn read_error_message(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => serde_json::from_str::<CloudinaryErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body),
        Err(e) => e.to_string(),
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(&self, file: &str, folder: &str) -> Result<StoredImage, UploadError> {
        let timestamp = unix_timestamp().ok_or(UploadError::ClockSkewed)?;
        let signature = sign_request(
            &format!("folder={folder}&timestamp={timestamp}"),
            &self.api_secret,
        );

        let data = json!({
            "file": file,
            "folder": folder,
            "api_key": self.api_key,
            "timestamp": timestamp,
            "signature": signature,
            "signature_algorithm": "sha256",
        });

        let response = self
            .client
            .post(self.endpoint("upload"))
            .json(&data)
            .send()
            .await
            .map_err(UploadError::RequestFailed)?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(UploadError::ResponseReadFailed)?;
                debug!("{:?}", body);

                let parsed = serde_json::from_str::<CloudinaryUploadResponse>(&body)
                    .map_err(UploadError::DeserializationFailed)?;

                Ok(StoredImage {
                    url: parsed.secure_url,
                    public_id: parsed.public_id,
                })
            }
            status => Err(UploadError::Rejected {
                status,
                message: read_error_message(response).await,
            }),
        }
    }

    async fn destroy(&self, public_id: &str) -> Result<DeleteOutcome, DeleteError> {
        let timestamp = unix_timestamp().ok_or(DeleteError::ClockSkewed)?;
        let signature = sign_request(
            &format!("public_id={public_id}&timestamp={timestamp}"),
            &self.api_secret,
        );

        let data = json!({
            "public_id": public_id,
            "api_key": self.api_key,
            "timestamp": timestamp,
            "signature": signature,
            "signature_algorithm": "sha256",
        });

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .json(&data)
            .send()
            .await
            .map_err(DeleteError::RequestFailed)?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(DeleteError::ResponseReadFailed)?;
                debug!("{:?}", body);

                let parsed = serde_json::from_str::<CloudinaryDeleteResponse>(&body)
                    .map_err(DeleteError::DeserializationFailed)?;

                Ok(DeleteOutcome {
                    result: parsed.result,
                })
            }
            status => Err(DeleteError::Rejected {
                status,
                message: read_error_message(response).await,
            }),
        }
    }
}
