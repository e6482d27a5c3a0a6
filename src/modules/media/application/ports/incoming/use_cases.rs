use async_trait::async_trait;

use crate::media::application::domain::{MediaFile, UploadTarget, UploadedMedia};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid file name")]
    InvalidFileName,

    /// Carries the media host's own message.
    #[error("{0}")]
    UploadFailed(String),
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    /// Validates `file` against the target's policy, then hands it to the
    /// media host. Returns the public URL.
    async fn upload(
        &self,
        target: UploadTarget,
        file: MediaFile,
    ) -> Result<UploadedMedia, UploadError>;
}
