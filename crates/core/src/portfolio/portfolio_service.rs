use log::{debug, warn};
use std::sync::Arc;

use chrono::Utc;

use super::portfolio_model::{Account, ExtractedAccount, PortfolioData};
use super::portfolio_traits::PortfolioServiceTrait;
use crate::constants::PORTFOLIO_DATA_KEY;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::store::KeyValueStore;

/// Service for reading and writing the persisted portfolio.
///
/// Emits `PortfolioChanged` after each successful mutation so readers can
/// subscribe instead of polling the store for changes.
pub struct PortfolioService {
    store: Arc<dyn KeyValueStore>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PortfolioService {
    pub fn new(store: Arc<dyn KeyValueStore>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        PortfolioService { store, event_sink }
    }

    fn emit_changed(&self, data: &PortfolioData) {
        let account_ids = data.accounts.iter().map(|a| a.id.clone()).collect();
        self.event_sink
            .emit(DomainEvent::portfolio_changed(account_ids));
    }
}

impl PortfolioServiceTrait for PortfolioService {
    /// Reads the portfolio; malformed stored data fails soft to the empty
    /// default after logging the anomaly.
    fn get_portfolio(&self) -> Result<PortfolioData> {
        let raw = match self.store.get(PORTFOLIO_DATA_KEY)? {
            Some(raw) => raw,
            None => return Ok(PortfolioData::default()),
        };

        match serde_json::from_str::<PortfolioData>(&raw) {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!("Stored portfolio data is malformed, using empty default: {e}");
                Ok(PortfolioData::default())
            }
        }
    }

    fn save_portfolio(&self, mut data: PortfolioData) -> Result<PortfolioData> {
        data.last_updated = Some(Utc::now());
        let raw = serde_json::to_string(&data)?;
        self.store.set(PORTFOLIO_DATA_KEY, &raw)?;
        self.emit_changed(&data);
        Ok(data)
    }

    fn add_extracted_account(&self, extracted: ExtractedAccount) -> Result<Account> {
        let mut data = self.get_portfolio()?;

        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            account_type: extracted
                .account_type
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            total_balance: extracted.total_balance.unwrap_or(0.0),
            asset_classes: extracted.asset_classes.clone(),
            extracted_at: Some(Utc::now()),
            document_name: extracted.document_name.clone(),
        };
        debug!(
            "Adding extracted account {} ({})",
            account.id, account.account_type
        );

        data.accounts.push(account.clone());
        data.extracted_data.push(extracted);
        data.recompute_total();

        self.save_portfolio(data)?;
        Ok(account)
    }

    fn clear_portfolio(&self) -> Result<()> {
        self.store.remove(PORTFOLIO_DATA_KEY)?;
        self.event_sink
            .emit(DomainEvent::portfolio_changed(Vec::new()));
        Ok(())
    }
}
