use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::GetAllUsersUseCase;

pub struct GetAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUsersUseCase for GetAllUsersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<User>, UserError> {
        self.logger.info("Fetching all users");

        let mut users = self.repository.get_all().await?;
        users.sort_by(|a, b| a.username.cmp(&b.username));

        self.logger.info(&format!("Found {} users", users.len()));
        Ok(users)
    }
}
