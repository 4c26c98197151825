use std::collections::HashMap;

use serde_json::Value;

use super::errors::UserError;

/// A registered user as stored under `Users/{key}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub key: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: String,
    pub friend_keys: HashMap<String, Value>,
}

impl User {
    pub fn validate(&self) -> Result<(), UserError> {
        if self.key.trim().is_empty() {
            return Err(UserError::KeyMissing);
        }
        if self.username.trim().is_empty() {
            return Err(UserError::UsernameEmpty);
        }
        if !is_plausible_email(&self.email) {
            return Err(UserError::InvalidEmail);
        }
        Ok(())
    }
}

/// Profile fields a partial update touches. Friend keys are managed by the
/// mobile client and never part of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(url) = &self.profile_image_url {
            user.profile_image_url = url.clone();
        }
    }
}

// One `@`, something on both sides, a dot in the domain.
fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
