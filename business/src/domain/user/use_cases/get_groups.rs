use async_trait::async_trait;

use crate::domain::group::model::Group;
use crate::domain::user::errors::UserError;

pub struct GetUserGroupsParams {
    pub user_key: String,
}

#[async_trait]
pub trait GetUserGroupsUseCase: Send + Sync {
    async fn execute(&self, params: GetUserGroupsParams) -> Result<Vec<Group>, UserError>;
}
