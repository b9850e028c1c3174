//! Local credential matching.
//!
//! # Responsibility
//! - Register, log in and change the password for locally stored users.
//!
//! # Invariants
//! - One credential key per phone number; login and password change operate
//!   on the same key.
//! - No network, no hashing: credentials are plain local strings matched
//!   exactly, which is the full extent of authentication in this system.

use crate::repo::profile_repo::ProfileRepository;
use crate::repo::RepoError;
use crate::storage::KeyValueStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Semantic error for local credential operations.
#[derive(Debug)]
pub enum AuthError {
    /// Phone or password input was empty.
    EmptyCredentials,
    /// Phone/password pair did not match a stored credential.
    InvalidCredentials,
    /// No user is currently logged in.
    NotLoggedIn,
    /// Old password did not match the stored one.
    WrongOldPassword,
    /// Replacement password was empty.
    EmptyNewPassword,
    /// New password and its confirmation differ.
    ConfirmationMismatch,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCredentials => write!(f, "phone and password must not be empty"),
            Self::InvalidCredentials => write!(f, "phone or password is incorrect"),
            Self::NotLoggedIn => write!(f, "no user is logged in"),
            Self::WrongOldPassword => write!(f, "old password is incorrect"),
            Self::EmptyNewPassword => write!(f, "new password must not be empty"),
            Self::ConfirmationMismatch => write!(f, "password confirmation does not match"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for login and password management.
pub struct AuthService<'s, S: KeyValueStore> {
    profiles: ProfileRepository<'s, S>,
}

impl<'s, S: KeyValueStore> AuthService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            profiles: ProfileRepository::new(store),
        }
    }

    /// Seeds the credential for a phone number.
    ///
    /// # Errors
    /// - `EmptyCredentials` when either input is empty.
    pub fn register(&self, phone: &str, password: &str) -> AuthResult<()> {
        let (phone, password) = normalized(phone, password)?;
        self.profiles.set_password_for(phone, password)?;
        Ok(())
    }

    /// Matches the pair against the stored credential and records the
    /// logged-in phone on success.
    ///
    /// # Errors
    /// - `EmptyCredentials` when either input is empty.
    /// - `InvalidCredentials` when no stored password matches exactly.
    pub fn login(&self, phone: &str, password: &str) -> AuthResult<()> {
        let (phone, password) = normalized(phone, password)?;

        let stored = self.profiles.password_for(phone)?;
        if stored.as_deref() != Some(password) {
            return Err(AuthError::InvalidCredentials);
        }

        self.profiles.set_current_phone(phone)?;
        Ok(())
    }

    /// Changes the password of the logged-in user.
    ///
    /// # Errors
    /// - `NotLoggedIn` when no current phone is recorded.
    /// - `WrongOldPassword`, `EmptyNewPassword`, `ConfirmationMismatch` per
    ///   the corresponding check, evaluated in that order.
    pub fn change_password(&self, old: &str, new: &str, confirm: &str) -> AuthResult<()> {
        let phone = self.profiles.current_phone()?.ok_or(AuthError::NotLoggedIn)?;

        let stored = self.profiles.password_for(&phone)?;
        if stored.as_deref() != Some(old) {
            return Err(AuthError::WrongOldPassword);
        }
        if new.is_empty() {
            return Err(AuthError::EmptyNewPassword);
        }
        if new != confirm {
            return Err(AuthError::ConfirmationMismatch);
        }

        self.profiles.set_password_for(&phone, new)?;
        Ok(())
    }
}

fn normalized<'a>(phone: &'a str, password: &'a str) -> AuthResult<(&'a str, &'a str)> {
    let phone = phone.trim();
    if phone.is_empty() || password.is_empty() {
        return Err(AuthError::EmptyCredentials);
    }
    Ok((phone, password))
}
