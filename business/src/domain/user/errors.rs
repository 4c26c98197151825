#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.key_missing")]
    KeyMissing,
    #[error("user.username_empty")]
    UsernameEmpty,
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.not_found")]
    NotFound,
    #[error("user.group_not_found")]
    GroupNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
