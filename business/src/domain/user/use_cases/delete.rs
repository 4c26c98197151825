use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct DeleteUserParams {
    pub key: String,
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError>;
}
