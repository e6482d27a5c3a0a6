mod snapshot;

pub use snapshot::{PortfolioSnapshot, Section};
