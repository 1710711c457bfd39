//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about persisted data changes. Consumers
/// (view layers, recalculation triggers) subscribe through a
/// `DomainEventSink` implementation instead of polling the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A user profile was created and persisted.
    ProfileSaved { user_id: String },

    /// The stored profile was removed.
    ProfileCleared,

    /// Goal cards were derived and persisted with the quiz results.
    GoalCardsGenerated { count: usize },

    /// Portfolio data was created, updated, or cleared.
    PortfolioChanged { account_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates a ProfileSaved event.
    pub fn profile_saved(user_id: impl Into<String>) -> Self {
        Self::ProfileSaved {
            user_id: user_id.into(),
        }
    }

    /// Creates a GoalCardsGenerated event.
    pub fn goal_cards_generated(count: usize) -> Self {
        Self::GoalCardsGenerated { count }
    }

    /// Creates a PortfolioChanged event.
    pub fn portfolio_changed(account_ids: Vec<String>) -> Self {
        Self::PortfolioChanged { account_ids }
    }
}
