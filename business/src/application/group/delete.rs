use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::group::errors::GroupError;
use crate::domain::group::repository::GroupRepository;
use crate::domain::group::use_cases::delete::{DeleteGroupParams, DeleteGroupUseCase};
use crate::domain::logger::Logger;

pub struct DeleteGroupUseCaseImpl {
    pub repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteGroupUseCase for DeleteGroupUseCaseImpl {
    async fn execute(&self, params: DeleteGroupParams) -> Result<(), GroupError> {
        self.logger.info(&format!("Deleting group: {}", params.key));

        if !self.repository.exists(&params.key).await? {
            self.logger
                .warn(&format!("Group not found for deletion: {}", params.key));
            return Err(GroupError::NotFound);
        }

        self.repository.delete(&params.key).await?;

        self.logger.info(&format!("Group deleted: {}", params.key));
        Ok(())
    }
}
