use async_trait::async_trait;

use crate::domain::user::errors::UserError;

pub struct AddUserGroupParams {
    pub user_key: String,
    pub group_key: String,
}

#[async_trait]
pub trait AddUserGroupUseCase: Send + Sync {
    async fn execute(&self, params: AddUserGroupParams) -> Result<(), UserError>;
}
