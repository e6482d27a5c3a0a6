use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Where an uploaded file ends up on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadTarget {
    Avatar,
    Project,
    Achievement,
}

impl UploadTarget {
    /// Destination folder on the media host.
    pub fn folder(&self) -> &'static str {
        match self {
            UploadTarget::Avatar => "portfolio/avatars",
            UploadTarget::Project => "portfolio/projects",
            UploadTarget::Achievement => "portfolio/achievements",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadTarget::Avatar => "avatar",
            UploadTarget::Project => "project",
            UploadTarget::Achievement => "achievement",
        }
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown upload target: {0}")]
pub struct UnknownUploadTarget(pub String);

impl FromStr for UploadTarget {
    type Err = UnknownUploadTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avatar" => Ok(UploadTarget::Avatar),
            "project" => Ok(UploadTarget::Project),
            "achievement" => Ok(UploadTarget::Achievement),
            other => Err(UnknownUploadTarget(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies by MIME prefix; parameters such as `; charset=` are ignored.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let (top, sub) = essence.split_once('/')?;
        if sub.is_empty() {
            return None;
        }

        match top {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// Resource segment of the upload endpoint.
    pub fn resource_type(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A file received from the admin UI.
#[derive(Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UploadedMedia {
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1/portfolio/avatars/me.png")]
    pub url: String,
    pub kind: MediaKind,
    pub size_bytes: u64,
}
