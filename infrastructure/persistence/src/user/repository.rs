use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use business::domain::errors::RepositoryError;
use business::domain::user::model::{User, UserChanges};
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::db::{DatabaseError, FirebaseDatabase, is_valid_key};

const USERS: &str = "Users";
const USER_GROUPS: &str = "UserGroups";

pub struct UserRepositoryFirebase {
    database: Arc<FirebaseDatabase>,
}

impl UserRepositoryFirebase {
    pub fn new(database: Arc<FirebaseDatabase>) -> Self {
        Self { database }
    }
}

fn user_path(key: &str) -> String {
    format!("{USERS}/{key}")
}

fn database_error(e: DatabaseError) -> RepositoryError {
    tracing::error!(error = %e, "User storage failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl UserRepository for UserRepositoryFirebase {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let Some(Value::Object(children)) = self.database.get(USERS).await.map_err(database_error)?
        else {
            return Ok(Vec::new());
        };

        let users = children
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<UserEntity>(value) {
                Ok(entity) => Some(entity.into_domain(&key)),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping undecodable user");
                    None
                }
            })
            .collect();

        Ok(users)
    }

    async fn get_by_key(&self, key: &str) -> Result<User, RepositoryError> {
        if !is_valid_key(key) {
            return Err(RepositoryError::NotFound);
        }

        let value = self
            .database
            .get(&user_path(key))
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        let entity: UserEntity =
            serde_json::from_value(value).map_err(|_| RepositoryError::Decode)?;
        Ok(entity.into_domain(key))
    }

    async fn exists(&self, key: &str) -> Result<bool, RepositoryError> {
        if !is_valid_key(key) {
            return Ok(false);
        }

        self.database
            .exists(&user_path(key))
            .await
            .map_err(database_error)
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        if !is_valid_key(&user.key) {
            return Err(RepositoryError::Persistence);
        }

        // PATCH creates the node when missing and keeps `friendKeys` otherwise.
        self.database
            .update(&user_path(&user.key), &UserEntity::profile_fields(user))
            .await
            .map_err(database_error)
    }

    async fn update(&self, key: &str, changes: &UserChanges) -> Result<(), RepositoryError> {
        if !is_valid_key(key) {
            return Err(RepositoryError::NotFound);
        }

        let fields = UserEntity::changed_fields(changes);
        if fields.is_empty() {
            return Ok(());
        }

        self.database
            .update(&user_path(key), &fields)
            .await
            .map_err(database_error)
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        if !is_valid_key(key) {
            return Err(RepositoryError::NotFound);
        }

        self.database
            .delete(&user_path(key))
            .await
            .map_err(database_error)
    }

    async fn group_keys(&self, user_key: &str) -> Result<Vec<String>, RepositoryError> {
        if !is_valid_key(user_key) {
            return Ok(Vec::new());
        }

        let stored = self
            .database
            .get(&format!("{USER_GROUPS}/{user_key}"))
            .await
            .map_err(database_error)?;

        let mut keys: Vec<String> = match stored {
            Some(Value::Object(entries)) => entries.into_iter().map(|(key, _)| key).collect(),
            _ => Vec::new(),
        };
        keys.sort();
        Ok(keys)
    }

    async fn add_group_key(&self, user_key: &str, group_key: &str) -> Result<(), RepositoryError> {
        if !is_valid_key(user_key) || !is_valid_key(group_key) {
            return Err(RepositoryError::Persistence);
        }

        let mut updates = Map::new();
        updates.insert(group_key.to_string(), Value::Bool(true));

        self.database
            .update(&format!("{USER_GROUPS}/{user_key}"), &updates)
            .await
            .map_err(database_error)
    }
}
