use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use business::domain::user::model::{User, UserChanges};

/// Shape of a document under `Users/{key}`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserEntity {
    pub user_key: String,
    pub username: String,
    // Written by early app versions.
    #[serde(rename = "userName", skip_serializing)]
    pub legacy_username: String,
    pub email: String,
    pub profile_image_url: String,
    #[serde(skip_serializing)]
    pub friend_keys: HashMap<String, Value>,
}

impl UserEntity {
    /// Profile fields only. Friend keys are never written from here.
    pub fn profile_fields(user: &User) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("userKey".to_string(), Value::from(user.key.as_str()));
        fields.insert("username".to_string(), Value::from(user.username.as_str()));
        fields.insert("email".to_string(), Value::from(user.email.as_str()));
        fields.insert(
            "profileImageUrl".to_string(),
            Value::from(user.profile_image_url.as_str()),
        );
        fields
    }

    pub fn changed_fields(changes: &UserChanges) -> Map<String, Value> {
        let mut fields = Map::new();
        if let Some(username) = &changes.username {
            fields.insert("username".to_string(), Value::from(username.as_str()));
        }
        if let Some(email) = &changes.email {
            fields.insert("email".to_string(), Value::from(email.as_str()));
        }
        if let Some(url) = &changes.profile_image_url {
            fields.insert("profileImageUrl".to_string(), Value::from(url.as_str()));
        }
        fields
    }

    pub fn into_domain(self, key: &str) -> User {
        let username = if self.username.is_empty() {
            self.legacy_username
        } else {
            self.username
        };

        User {
            key: if self.user_key.is_empty() {
                key.to_string()
            } else {
                self.user_key
            },
            username,
            email: self.email,
            profile_image_url: self.profile_image_url,
            friend_keys: self.friend_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_fall_back_to_legacy_username() {
        let entity: UserEntity = serde_json::from_value(json!({
            "userName": "Dana",
            "email": "dana@example.com",
            "friendKeys": {"u2": true}
        }))
        .unwrap();

        let user = entity.into_domain("u1");

        assert_eq!(user.key, "u1");
        assert_eq!(user.username, "Dana");
        assert_eq!(user.friend_keys.len(), 1);
    }

    #[test]
    fn should_prefer_current_username_when_both_present() {
        let entity: UserEntity = serde_json::from_value(json!({
            "username": "New",
            "userName": "Old"
        }))
        .unwrap();

        assert_eq!(entity.into_domain("u1").username, "New");
    }

    #[test]
    fn should_leave_friend_keys_out_of_profile_fields() {
        let user = User {
            key: "u1".to_string(),
            username: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            friend_keys: HashMap::from([("u2".to_string(), Value::Bool(true))]),
            ..Default::default()
        };

        let fields = UserEntity::profile_fields(&user);

        assert!(!fields.contains_key("friendKeys"));
        assert_eq!(fields["username"], json!("Dana"));
    }
}
