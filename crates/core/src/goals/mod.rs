//! Goals module - goal card derivation and progress calculation.

mod goals_model;
mod progress;

pub use goals_model::{goal_description, goal_title, GoalCard};
pub use progress::{calculate_progress, goal_category, GoalCategory, GoalProgress};
