use async_trait::async_trait;

use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;

#[async_trait]
pub trait GetPublicGroupsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Group>, GroupError>;
}
