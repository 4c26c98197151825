use chrono::Utc;
use uuid::Uuid;

use super::errors::MessageError;

/// A chat message posted to a group, stored under `GroupsMessages/{key}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub key: String,
    pub group_key: String,
    pub sender_key: String,
    pub sender_name: String,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(
        group_key: String,
        sender_key: String,
        sender_name: String,
        text: String,
    ) -> Result<Self, MessageError> {
        if group_key.trim().is_empty() {
            return Err(MessageError::GroupKeyMissing);
        }
        if text.trim().is_empty() {
            return Err(MessageError::TextEmpty);
        }

        Ok(Self {
            key: Uuid::new_v4().to_string(),
            group_key,
            sender_key,
            sender_name,
            text,
            timestamp: Utc::now().timestamp_millis(),
        })
    }
}
