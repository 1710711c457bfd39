//! Goal card domain models.

use serde::{Deserialize, Serialize};

use crate::profiles::{Focus, Timeline};

/// Domain model representing a derived goal card.
///
/// One card is produced per completed quiz submission, pairing the selected
/// focus with its target amount and timeline. Field names match the stored
/// `quiz_results` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalCard {
    pub title: String,
    pub target_amount: f64,
    /// Display label, e.g. "5 Years"
    pub timeline: String,
    pub description: String,
    pub goal_type: Focus,
}

impl GoalCard {
    /// Derives the goal card for a completed quiz.
    pub fn from_quiz(focus: Focus, target_amount: f64, timeline: Timeline) -> Self {
        GoalCard {
            title: goal_title(focus.as_str()).to_string(),
            target_amount,
            timeline: timeline.label().to_string(),
            description: goal_description(focus.as_str()).to_string(),
            goal_type: focus,
        }
    }
}

/// Fixed focus-to-title lookup.
///
/// Takes the stored string form so cards re-derived from external data with
/// an unrecognized focus still get a usable title.
pub fn goal_title(focus: &str) -> &'static str {
    match focus {
        "home" => "Home Down Payment",
        "retirement" => "Retirement Savings",
        "emergency" => "Emergency Fund",
        _ => "Financial Goal",
    }
}

/// Fixed focus-to-description lookup.
pub fn goal_description(focus: &str) -> &'static str {
    match focus {
        "home" => "Building your down payment fund to achieve homeownership",
        "retirement" => "Securing your financial future for retirement",
        "emergency" => "Creating a safety net for unexpected expenses",
        _ => "Your personalized financial goal",
    }
}
