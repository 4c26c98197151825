use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{User, UserChanges};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn get_by_key(&self, key: &str) -> Result<User, RepositoryError>;
    async fn exists(&self, key: &str) -> Result<bool, RepositoryError>;
    /// Writes the profile fields of `user`; stored friend keys are kept.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    async fn update(&self, key: &str, changes: &UserChanges) -> Result<(), RepositoryError>;
    async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
    /// Keys of the groups listed under `UserGroups/{user_key}`.
    async fn group_keys(&self, user_key: &str) -> Result<Vec<String>, RepositoryError>;
    async fn add_group_key(&self, user_key: &str, group_key: &str)
    -> Result<(), RepositoryError>;
}
