//! Profile domain models.
//!
//! Field names on persisted models are snake_case on purpose: the stored
//! JSON shapes are shared with the rest of the UI and must stay readable by
//! it (keys `user_profile`, `quiz_results`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{TARGET_AMOUNT_MAX, TARGET_AMOUNT_MIN, TARGET_AMOUNT_STEP};
use crate::errors::{Error, Result, ValidationError};

/// The user's primary financial objective, selected at quiz step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Home,
    Retirement,
    Emergency,
}

impl Focus {
    /// Stored string form of the focus.
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Home => "home",
            Focus::Retirement => "retirement",
            Focus::Emergency => "emergency",
        }
    }
}

/// Horizon for reaching the target, selected at quiz step 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Short,
    Medium,
    Long,
}

impl Timeline {
    /// User-facing label for this timeline.
    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Short => "1-3 Years",
            Timeline::Medium => "5 Years",
            Timeline::Long => "10+ Years",
        }
    }
}

/// Domain model representing a user's quiz-derived profile.
///
/// Created exactly once per completed quiz; there is no edit flow, so the
/// record is immutable until the store is cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub primary_focus: Focus,
    pub target_amount: f64,
    pub timeline: Timeline,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserProfile {
    pub primary_focus: Focus,
    pub target_amount: f64,
    pub timeline: Timeline,
}

impl NewUserProfile {
    /// Validates the new profile data.
    pub fn validate(&self) -> Result<()> {
        if self.target_amount < TARGET_AMOUNT_MIN || self.target_amount > TARGET_AMOUNT_MAX {
            return Err(Error::Validation(ValidationError::AmountOutOfRange {
                amount: self.target_amount,
                min: TARGET_AMOUNT_MIN,
                max: TARGET_AMOUNT_MAX,
            }));
        }
        if (self.target_amount / TARGET_AMOUNT_STEP).fract() != 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Target amount {} is not a multiple of {}",
                self.target_amount, TARGET_AMOUNT_STEP
            ))));
        }
        Ok(())
    }

    /// Materializes the profile with a fresh identifier and timestamps.
    pub fn into_profile(self, now: DateTime<Utc>) -> UserProfile {
        UserProfile {
            user_id: format!("user_{}", uuid::Uuid::new_v4()),
            primary_focus: self.primary_focus,
            target_amount: self.target_amount,
            timeline: self.timeline,
            created_at: now,
            updated_at: now,
        }
    }
}
