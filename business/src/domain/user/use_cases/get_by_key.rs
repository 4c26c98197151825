use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetUserByKeyParams {
    pub key: String,
}

#[async_trait]
pub trait GetUserByKeyUseCase: Send + Sync {
    async fn execute(&self, params: GetUserByKeyParams) -> Result<User, UserError>;
}
