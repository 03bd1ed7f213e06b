//! Application services for portfolio orchestration.

mod portfolio;

pub use portfolio::{
    CreateProjectRequest, PortfolioService, PortfolioServiceError, PortfolioServiceResult,
};
