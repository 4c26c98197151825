use async_trait::async_trait;

use crate::domain::message::errors::MessageError;
use crate::domain::message::model::ChatMessage;

pub struct GetGroupMessagesParams {
    pub group_key: String,
}

#[async_trait]
pub trait GetGroupMessagesUseCase: Send + Sync {
    async fn execute(&self, params: GetGroupMessagesParams)
    -> Result<Vec<ChatMessage>, MessageError>;
}
