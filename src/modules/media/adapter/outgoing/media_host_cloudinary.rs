use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::media_host_config::MediaHostConfig;
use crate::media::application::domain::{MediaFile, MediaKind};
use crate::media::application::ports::outgoing::{MediaHost, MediaHostError};

/// Unsigned uploads to a Cloudinary-compatible endpoint.
#[derive(Clone)]
pub struct CloudinaryMediaHost {
    client: reqwest::Client,
    config: MediaHostConfig,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl CloudinaryMediaHost {
    pub fn new(config: MediaHostConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: MediaHostConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl MediaHost for CloudinaryMediaHost {
    async fn upload(
        &self,
        kind: MediaKind,
        folder: &str,
        file: MediaFile,
    ) -> Result<String, MediaHostError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| MediaHostError(format!("Invalid content type: {}", e)))?;

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(self.config.upload_endpoint(kind.resource_type()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaHostError(format!("Upload request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("Upload failed with status {}", status));
            return Err(MediaHostError(message));
        }

        response
            .json::<UploadResponse>()
            .await
            .map(|r| r.secure_url)
            .map_err(|e| MediaHostError(format!("Unexpected upload response: {}", e)))
    }
}
