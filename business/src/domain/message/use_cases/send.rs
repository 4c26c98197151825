use async_trait::async_trait;

use crate::domain::message::errors::MessageError;
use crate::domain::message::model::ChatMessage;

pub struct SendMessageParams {
    pub group_key: String,
    pub sender_key: String,
    pub sender_name: String,
    pub text: String,
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, params: SendMessageParams) -> Result<ChatMessage, MessageError>;
}
