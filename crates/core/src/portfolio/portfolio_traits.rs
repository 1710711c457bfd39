use crate::errors::Result;
use crate::portfolio::{Account, ExtractedAccount, PortfolioData};

/// Trait for portfolio service operations.
pub trait PortfolioServiceTrait: Send + Sync {
    /// Returns the stored portfolio, or an empty default if absent or
    /// unreadable.
    fn get_portfolio(&self) -> Result<PortfolioData>;

    /// Persists the portfolio, stamping `last_updated`.
    fn save_portfolio(&self, data: PortfolioData) -> Result<PortfolioData>;

    /// Adds one extracted account, recomputes the total, and persists.
    fn add_extracted_account(&self, extracted: ExtractedAccount) -> Result<Account>;

    /// Removes the stored portfolio.
    fn clear_portfolio(&self) -> Result<()>;
}
