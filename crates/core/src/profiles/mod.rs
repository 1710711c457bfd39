//! Profiles module - domain models, services, and traits.

mod profiles_model;
mod profiles_service;
mod profiles_traits;

#[cfg(test)]
mod profiles_model_tests;

pub use profiles_model::{Focus, NewUserProfile, Timeline, UserProfile};
pub use profiles_service::ProfileService;
pub use profiles_traits::ProfileServiceTrait;
