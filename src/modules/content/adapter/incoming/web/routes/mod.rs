mod collections;
mod dashboard;
mod error;
mod profile;

pub use collections::*;
pub use dashboard::*;
pub(crate) use error::content_error_response;
pub use profile::*;
