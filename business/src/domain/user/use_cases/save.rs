use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct SaveUserParams {
    pub key: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
}

#[async_trait]
pub trait SaveUserUseCase: Send + Sync {
    async fn execute(&self, params: SaveUserParams) -> Result<User, UserError>;
}
