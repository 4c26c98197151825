use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::group::repository::GroupRepository;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::add_group::{AddUserGroupParams, AddUserGroupUseCase};

pub struct AddUserGroupUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub group_repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddUserGroupUseCase for AddUserGroupUseCaseImpl {
    async fn execute(&self, params: AddUserGroupParams) -> Result<(), UserError> {
        self.logger.info(&format!(
            "Adding group {} to user {}",
            params.group_key, params.user_key
        ));

        if !self.repository.exists(&params.user_key).await? {
            return Err(UserError::NotFound);
        }
        if !self.group_repository.exists(&params.group_key).await? {
            return Err(UserError::GroupNotFound);
        }

        self.repository
            .add_group_key(&params.user_key, &params.group_key)
            .await?;
        Ok(())
    }
}
