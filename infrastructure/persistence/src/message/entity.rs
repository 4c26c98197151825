use serde::{Deserialize, Serialize};

use business::domain::message::model::ChatMessage;

/// Shape of a document under `GroupsMessages/{key}`.
///
/// Older clients wrote the group under `groupId`; both fields are written and
/// either is accepted on read.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageEntity {
    pub message_key: String,
    pub group_key: String,
    pub group_id: String,
    pub sender_key: String,
    pub sender_name: String,
    pub message: String,
    pub timestamp: i64,
}

impl MessageEntity {
    pub fn from_domain(message: &ChatMessage) -> Self {
        Self {
            message_key: message.key.clone(),
            group_key: message.group_key.clone(),
            group_id: message.group_key.clone(),
            sender_key: message.sender_key.clone(),
            sender_name: message.sender_name.clone(),
            message: message.text.clone(),
            timestamp: message.timestamp,
        }
    }

    pub fn belongs_to(&self, group_key: &str) -> bool {
        self.group_key == group_key || self.group_id == group_key
    }

    pub fn into_domain(self, key: &str) -> ChatMessage {
        ChatMessage {
            key: if self.message_key.is_empty() {
                key.to_string()
            } else {
                self.message_key
            },
            group_key: if self.group_key.is_empty() {
                self.group_id
            } else {
                self.group_key
            },
            sender_key: self.sender_key,
            sender_name: self.sender_name,
            text: self.message,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_match_legacy_group_id() {
        let entity: MessageEntity = serde_json::from_value(json!({
            "groupId": "g1",
            "message": "hello"
        }))
        .unwrap();

        assert!(entity.belongs_to("g1"));
        assert!(!entity.belongs_to("g2"));

        let message = entity.into_domain("m1");
        assert_eq!(message.key, "m1");
        assert_eq!(message.group_key, "g1");
        assert_eq!(message.text, "hello");
    }
}
