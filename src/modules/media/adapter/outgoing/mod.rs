pub mod media_host_cloudinary;
pub mod media_host_config;

pub use media_host_cloudinary::CloudinaryMediaHost;
pub use media_host_config::{MediaHostConfig, MediaHostConfigError};
