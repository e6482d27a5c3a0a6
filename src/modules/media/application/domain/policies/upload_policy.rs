use crate::media::application::domain::entities::{MediaKind, UploadTarget};

pub const MIB: u64 = 1024 * 1024;

/// Size ceilings for one upload target. A `None` ceiling means the kind is
/// not accepted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_image_bytes: Option<u64>,
    pub max_video_bytes: Option<u64>,
    pub max_file_name_len: usize,
}

impl UploadPolicy {
    pub const MAX_FILE_NAME_LEN: usize = 255;

    pub fn for_target(target: UploadTarget) -> Self {
        let (max_image_bytes, max_video_bytes) = match target {
            UploadTarget::Avatar => (Some(5 * MIB), None),
            UploadTarget::Project => (Some(10 * MIB), Some(50 * MIB)),
            UploadTarget::Achievement => (Some(10 * MIB), None),
        };

        Self {
            max_image_bytes,
            max_video_bytes,
            max_file_name_len: Self::MAX_FILE_NAME_LEN,
        }
    }

    pub fn limit_for(&self, kind: MediaKind) -> Option<u64> {
        match kind {
            MediaKind::Image => self.max_image_bytes,
            MediaKind::Video => self.max_video_bytes,
        }
    }
}
