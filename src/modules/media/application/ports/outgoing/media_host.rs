use async_trait::async_trait;

use crate::media::application::domain::{MediaFile, MediaKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MediaHostError(pub String);

/// Third-party host that stores files and serves them from a public URL.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Returns the secure URL of the stored file.
    async fn upload(
        &self,
        kind: MediaKind,
        folder: &str,
        file: MediaFile,
    ) -> Result<String, MediaHostError>;
}
