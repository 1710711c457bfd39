//! Portfolio domain models.
//!
//! Shapes mirror the stored `portfolio_data` JSON shared with the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account known to the portfolio, typically extracted from an uploaded
/// statement by the external analysis collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    /// Free-text classification, e.g. "Roth IRA", "Savings Account".
    pub account_type: String,
    /// Non-negative; absent or invalid input defaults to zero.
    #[serde(default)]
    pub total_balance: f64,
    #[serde(default)]
    pub asset_classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
}

/// Raw extraction result for one document, as returned by the intake
/// collaborator. Kept verbatim in `extracted_data` for auditability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedAccount {
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub total_balance: Option<f64>,
    #[serde(default)]
    pub asset_classes: Vec<String>,
    #[serde(default)]
    pub document_name: Option<String>,
}

/// The persisted portfolio: accounts, their total, and raw extractions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PortfolioData {
    pub accounts: Vec<Account>,
    pub total_balance: f64,
    pub last_updated: Option<DateTime<Utc>>,
    pub extracted_data: Vec<ExtractedAccount>,
}

impl PortfolioData {
    /// Recomputes the total balance from the account list.
    pub fn recompute_total(&mut self) {
        self.total_balance = self.accounts.iter().map(|a| a.total_balance).sum();
    }
}
