use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ChatMessage;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_by_group(&self, group_key: &str) -> Result<Vec<ChatMessage>, RepositoryError>;
    async fn save(&self, message: &ChatMessage) -> Result<(), RepositoryError>;
}
