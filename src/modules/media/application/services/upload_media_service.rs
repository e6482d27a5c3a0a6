use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::media::application::domain::{
    MediaFile, MediaKind, UploadPolicy, UploadTarget, UploadedMedia,
};
use crate::media::application::ports::incoming::{UploadError, UploadMediaUseCase};
use crate::media::application::ports::outgoing::MediaHost;

#[derive(Clone)]
pub struct UploadMediaService {
    host: Arc<dyn MediaHost>,
}

impl UploadMediaService {
    pub fn new(host: Arc<dyn MediaHost>) -> Self {
        Self { host }
    }
}

/// Accepts a bare file name only: no directories, no control characters.
fn validate_file_name(file_name: &str, max_len: usize) -> Result<(), UploadError> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or(UploadError::InvalidFileName)?;

    if base.is_empty() || base.len() > max_len || base != file_name {
        return Err(UploadError::InvalidFileName);
    }

    if base.chars().any(|c| c.is_control()) {
        return Err(UploadError::InvalidFileName);
    }

    Ok(())
}

fn validate(target: UploadTarget, file: &MediaFile) -> Result<MediaKind, UploadError> {
    if file.bytes.is_empty() {
        return Err(UploadError::EmptyFile);
    }

    let policy = UploadPolicy::for_target(target);
    validate_file_name(&file.file_name, policy.max_file_name_len)?;

    let kind = MediaKind::from_content_type(&file.content_type)
        .ok_or_else(|| UploadError::UnsupportedMediaType(file.content_type.clone()))?;

    let max_bytes = policy
        .limit_for(kind)
        .ok_or_else(|| UploadError::UnsupportedMediaType(file.content_type.clone()))?;

    if file.size() > max_bytes {
        return Err(UploadError::FileTooLarge {
            max_bytes,
            actual_bytes: file.size(),
        });
    }

    Ok(kind)
}

#[async_trait]
impl UploadMediaUseCase for UploadMediaService {
    async fn upload(
        &self,
        target: UploadTarget,
        file: MediaFile,
    ) -> Result<UploadedMedia, UploadError> {
        let kind = validate(target, &file).inspect_err(|e| {
            warn!(upload_target = %target, file = ?file, "Upload rejected: {}", e);
        })?;
        let size_bytes = file.size();

        let url = self
            .host
            .upload(kind, target.folder(), file)
            .await
            .map_err(|e| {
                error!(upload_target = %target, "Media host upload failed: {}", e);
                UploadError::UploadFailed(e.0)
            })?;

        info!(upload_target = %target, size_bytes, "Media uploaded");

        Ok(UploadedMedia {
            url,
            kind,
            size_bytes,
        })
    }
}
