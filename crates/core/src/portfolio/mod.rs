//! Portfolio module - persisted account data extracted from documents.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::{Account, ExtractedAccount, PortfolioData};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
