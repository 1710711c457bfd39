use crate::errors::Result;
use crate::profiles::UserProfile;

/// Trait for profile service operations.
pub trait ProfileServiceTrait: Send + Sync {
    /// Returns the stored profile, or `None` if absent or unreadable.
    fn get_profile(&self) -> Result<Option<UserProfile>>;

    /// Persists the profile under the shared `user_profile` key.
    fn save_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Removes the stored profile.
    fn clear_profile(&self) -> Result<()>;
}
