#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("message.text_empty")]
    TextEmpty,
    #[error("message.group_key_missing")]
    GroupKeyMissing,
    #[error("message.group_not_found")]
    GroupNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
