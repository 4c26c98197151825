use async_trait::async_trait;

use crate::domain::group::errors::GroupError;

pub struct DeleteGroupParams {
    pub key: String,
}

#[async_trait]
pub trait DeleteGroupUseCase: Send + Sync {
    async fn execute(&self, params: DeleteGroupParams) -> Result<(), GroupError>;
}
