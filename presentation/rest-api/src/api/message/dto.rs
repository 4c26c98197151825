use poem_openapi::Object;

use business::domain::message::model::ChatMessage;

#[derive(Debug, Clone, Object)]
pub struct SendMessageRequest {
    pub sender_key: String,
    pub sender_name: String,
    /// Message text (cannot be blank)
    pub text: String,
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub key: String,
    pub group_key: String,
    pub sender_key: String,
    pub sender_name: String,
    pub text: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl From<ChatMessage> for MessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            key: message.key,
            group_key: message.group_key,
            sender_key: message.sender_key,
            sender_name: message.sender_name,
            text: message.text,
            timestamp: message.timestamp,
        }
    }
}
