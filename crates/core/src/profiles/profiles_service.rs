use log::{debug, warn};
use std::sync::Arc;

use super::profiles_traits::ProfileServiceTrait;
use crate::constants::USER_PROFILE_KEY;
use crate::errors::Result;
use crate::profiles::UserProfile;
use crate::store::KeyValueStore;

/// Service for reading and writing the persisted user profile.
pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        ProfileService { store }
    }
}

impl ProfileServiceTrait for ProfileService {
    /// Reads the profile from the store.
    ///
    /// Malformed stored data fails soft: the anomaly is logged and the
    /// profile is treated as absent rather than surfacing an error.
    fn get_profile(&self) -> Result<Option<UserProfile>> {
        let raw = match self.store.get(USER_PROFILE_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!("Stored user profile is malformed, treating as absent: {e}");
                Ok(None)
            }
        }
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        debug!("Saving user profile {}", profile.user_id);
        let raw = serde_json::to_string(profile)?;
        self.store.set(USER_PROFILE_KEY, &raw)
    }

    fn clear_profile(&self) -> Result<()> {
        self.store.remove(USER_PROFILE_KEY)
    }
}
