use async_trait::async_trait;

use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;

pub struct GetGroupByKeyParams {
    pub key: String,
}

#[async_trait]
pub trait GetGroupByKeyUseCase: Send + Sync {
    async fn execute(&self, params: GetGroupByKeyParams) -> Result<Group, GroupError>;
}
