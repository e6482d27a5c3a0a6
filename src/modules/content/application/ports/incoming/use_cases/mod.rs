mod collection;
mod dashboard;
mod profile;

pub use collection::{CollectionUseCase, ContentError};
pub use dashboard::{DashboardError, DashboardStats, DashboardUseCase};
pub use profile::ProfileUseCase;
