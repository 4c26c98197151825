use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::message::model::ChatMessage;
use business::domain::message::repository::MessageRepository;

use super::entity::MessageEntity;
use crate::db::{DatabaseError, FirebaseDatabase, is_valid_key};

const MESSAGES: &str = "GroupsMessages";

pub struct MessageRepositoryFirebase {
    database: Arc<FirebaseDatabase>,
}

impl MessageRepositoryFirebase {
    pub fn new(database: Arc<FirebaseDatabase>) -> Self {
        Self { database }
    }
}

fn database_error(e: DatabaseError) -> RepositoryError {
    tracing::error!(error = %e, "Message storage failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl MessageRepository for MessageRepositoryFirebase {
    async fn find_by_group(&self, group_key: &str) -> Result<Vec<ChatMessage>, RepositoryError> {
        let Some(Value::Object(children)) =
            self.database.get(MESSAGES).await.map_err(database_error)?
        else {
            return Ok(Vec::new());
        };

        let messages = children
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<MessageEntity>(value) {
                Ok(entity) => Some((key, entity)),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping undecodable message");
                    None
                }
            })
            .filter(|(_, entity)| entity.belongs_to(group_key))
            .map(|(key, entity)| entity.into_domain(&key))
            .collect();

        Ok(messages)
    }

    async fn save(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        if !is_valid_key(&message.key) {
            return Err(RepositoryError::Persistence);
        }

        self.database
            .set(
                &format!("{MESSAGES}/{}", message.key),
                &MessageEntity::from_domain(message),
            )
            .await
            .map_err(database_error)
    }
}
