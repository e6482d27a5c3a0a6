#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaHostConfigError {
    #[error("MEDIA_CLOUD_NAME must be set")]
    MissingCloudName,
}

#[derive(Debug, Clone)]
pub struct MediaHostConfig {
    pub base_url: String,
    pub cloud_name: String,
    pub upload_preset: String,
}

impl MediaHostConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.cloudinary.com/v1_1";
    pub const DEFAULT_UPLOAD_PRESET: &'static str = "portfolio";

    /// `MEDIA_UPLOAD_BASE_URL`, `MEDIA_CLOUD_NAME` (required), `MEDIA_UPLOAD_PRESET`.
    pub fn from_env() -> Result<Self, MediaHostConfigError> {
        fn non_empty(key: &str) -> Option<String> {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Ok(Self {
            base_url: non_empty("MEDIA_UPLOAD_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            cloud_name: non_empty("MEDIA_CLOUD_NAME")
                .ok_or(MediaHostConfigError::MissingCloudName)?,
            upload_preset: non_empty("MEDIA_UPLOAD_PRESET")
                .unwrap_or_else(|| Self::DEFAULT_UPLOAD_PRESET.to_string()),
        })
    }

    /// `{base_url}/{cloud_name}/{resource_type}/upload`
    pub fn upload_endpoint(&self, resource_type: &str) -> String {
        format!(
            "{}/{}/{}/upload",
            self.base_url.trim_end_matches('/'),
            self.cloud_name,
            resource_type
        )
    }
}
