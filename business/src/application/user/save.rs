use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::save::{SaveUserParams, SaveUserUseCase};

pub struct SaveUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveUserUseCase for SaveUserUseCaseImpl {
    async fn execute(&self, params: SaveUserParams) -> Result<User, UserError> {
        self.logger.info(&format!("Saving user: {}", params.key));

        let user = User {
            key: params.key,
            username: params.username,
            email: params.email.trim().to_string(),
            profile_image_url: params.profile_image_url.unwrap_or_default(),
            ..Default::default()
        };
        user.validate()?;

        self.repository.save(&user).await?;

        self.logger.info(&format!("User saved: {}", user.key));
        Ok(user)
    }
}
