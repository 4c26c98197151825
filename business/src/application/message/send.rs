use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::group::repository::GroupRepository;
use crate::domain::logger::Logger;
use crate::domain::message::errors::MessageError;
use crate::domain::message::model::ChatMessage;
use crate::domain::message::repository::MessageRepository;
use crate::domain::message::use_cases::send::{SendMessageParams, SendMessageUseCase};

pub struct SendMessageUseCaseImpl {
    pub repository: Arc<dyn MessageRepository>,
    pub group_repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(&self, params: SendMessageParams) -> Result<ChatMessage, MessageError> {
        self.logger
            .info(&format!("Sending message to group: {}", params.group_key));

        let message = ChatMessage::new(
            params.group_key,
            params.sender_key,
            params.sender_name,
            params.text,
        )?;

        self.group_repository
            .get_by_key(&message.group_key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MessageError::GroupNotFound,
                other => MessageError::Repository(other),
            })?;

        self.repository.save(&message).await?;
        self.group_repository
            .add_message_key(&message.group_key, &message.key)
            .await?;

        self.logger.info(&format!("Message sent: {}", message.key));
        Ok(message)
    }
}
