//! Heritage Hub Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Heritage Hub: the quiz
//! wizard that derives a financial goal from a user's answers, the goal
//! progress calculator, and the persisted profile/portfolio stores.
//! It is storage-agnostic and defines a key-value port that is implemented
//! by the `storage-local` crate.

pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod intake;
pub mod portfolio;
pub mod profiles;
pub mod quiz;
pub mod store;

// Re-export common types from the goals and profiles modules
pub use goals::*;
pub use profiles::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
