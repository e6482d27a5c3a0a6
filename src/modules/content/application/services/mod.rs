mod collection_service;
mod dashboard_service;
mod profile_service;

pub use collection_service::CollectionService;
pub(crate) use collection_service::{to_json, to_record};
pub use dashboard_service::DashboardService;
pub use profile_service::ProfileService;
