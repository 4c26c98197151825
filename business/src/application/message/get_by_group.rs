use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::message::errors::MessageError;
use crate::domain::message::model::ChatMessage;
use crate::domain::message::repository::MessageRepository;
use crate::domain::message::use_cases::get_by_group::{
    GetGroupMessagesParams, GetGroupMessagesUseCase,
};

pub struct GetGroupMessagesUseCaseImpl {
    pub repository: Arc<dyn MessageRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetGroupMessagesUseCase for GetGroupMessagesUseCaseImpl {
    async fn execute(
        &self,
        params: GetGroupMessagesParams,
    ) -> Result<Vec<ChatMessage>, MessageError> {
        self.logger
            .info(&format!("Fetching messages for group: {}", params.group_key));

        let mut messages = self.repository.find_by_group(&params.group_key).await?;
        messages.sort_by_key(|m| m.timestamp);

        Ok(messages)
    }
}
