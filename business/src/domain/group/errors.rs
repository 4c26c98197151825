#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("group.name_empty")]
    NameEmpty,
    #[error("group.admin_missing")]
    AdminMissing,
    #[error("group.invalid_price")]
    InvalidPrice,
    #[error("group.invalid_type")]
    InvalidType(String),
    #[error("group.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
