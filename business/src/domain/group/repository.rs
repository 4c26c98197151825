use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::changes::GroupChanges;
use super::model::Group;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Group>, RepositoryError>;
    async fn get_by_key(&self, key: &str) -> Result<Group, RepositoryError>;
    /// Whether anything is stored under `key`, decodable or not.
    async fn exists(&self, key: &str) -> Result<bool, RepositoryError>;
    async fn save(&self, group: &Group) -> Result<(), RepositoryError>;
    /// Writes only the fields set in `changes`, leaving the rest of the
    /// stored document untouched.
    async fn update(&self, key: &str, changes: &GroupChanges) -> Result<(), RepositoryError>;
    async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
    async fn add_message_key(&self, group_key: &str, message_key: &str)
    -> Result<(), RepositoryError>;
}
