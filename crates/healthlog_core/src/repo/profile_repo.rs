//! User profile and credential persistence.
//!
//! These fields sit outside the metrics engine proper: plain string keys for
//! the profile screens plus one password key per phone number for local
//! credential matching.

use crate::repo::RepoResult;
use crate::storage::KeyValueStore;

/// Persisted key for the display name.
pub const USER_NAME_KEY: &str = "userName";
/// Persisted key for the phone number shown on the profile screen.
pub const USER_PHONE_KEY: &str = "userPhone";
/// Persisted key for the avatar reference.
pub const USER_AVATAR_KEY: &str = "userAvatar";
/// Persisted key for the phone of the logged-in user.
pub const CURRENT_USER_PHONE_KEY: &str = "currentUserPhone";

const PASSWORD_KEY_PREFIX: &str = "userPassword_";

/// Editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub avatar: String,
}

/// Repository for profile and credential keys.
pub struct ProfileRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> ProfileRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Loads the profile, with missing fields as empty strings.
    pub fn profile(&self) -> RepoResult<UserProfile> {
        Ok(UserProfile {
            name: self.store.get(USER_NAME_KEY)?.unwrap_or_default(),
            phone: self.store.get(USER_PHONE_KEY)?.unwrap_or_default(),
            avatar: self.store.get(USER_AVATAR_KEY)?.unwrap_or_default(),
        })
    }

    /// Overwrites all profile fields.
    pub fn set_profile(&self, profile: &UserProfile) -> RepoResult<()> {
        self.store.set(USER_NAME_KEY, &profile.name)?;
        self.store.set(USER_PHONE_KEY, &profile.phone)?;
        self.store.set(USER_AVATAR_KEY, &profile.avatar)?;
        Ok(())
    }

    /// Stored password for one phone number.
    pub fn password_for(&self, phone: &str) -> RepoResult<Option<String>> {
        Ok(self.store.get(&password_key(phone))?)
    }

    /// Overwrites the password for one phone number.
    pub fn set_password_for(&self, phone: &str, password: &str) -> RepoResult<()> {
        self.store.set(&password_key(phone), password)?;
        Ok(())
    }

    /// Phone number of the logged-in user, if any.
    pub fn current_phone(&self) -> RepoResult<Option<String>> {
        Ok(self.store.get(CURRENT_USER_PHONE_KEY)?)
    }

    /// Records which user is logged in.
    pub fn set_current_phone(&self, phone: &str) -> RepoResult<()> {
        self.store.set(CURRENT_USER_PHONE_KEY, phone)?;
        Ok(())
    }
}

fn password_key(phone: &str) -> String {
    format!("{PASSWORD_KEY_PREFIX}{phone}")
}
