use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_by_key::{GetUserByKeyParams, GetUserByKeyUseCase};

pub struct GetUserByKeyUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserByKeyUseCase for GetUserByKeyUseCaseImpl {
    async fn execute(&self, params: GetUserByKeyParams) -> Result<User, UserError> {
        self.logger.info(&format!("Fetching user: {}", params.key));

        self.repository
            .get_by_key(&params.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger.warn(&format!("User not found: {}", params.key));
                    UserError::NotFound
                }
                other => UserError::Repository(other),
            })
    }
}
