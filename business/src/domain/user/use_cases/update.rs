use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct UpdateUserParams {
    pub key: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, UserError>;
}
