pub mod entities;
pub mod policies;

pub use entities::{MediaFile, MediaKind, UploadTarget, UploadedMedia};
pub use policies::upload_policy::UploadPolicy;
