mod cached_portfolio_queries;

pub use cached_portfolio_queries::{CachedPortfolioQueries, PortfolioCacheConfig};
