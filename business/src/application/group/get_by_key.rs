use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;
use crate::domain::group::repository::GroupRepository;
use crate::domain::group::use_cases::get_by_key::{GetGroupByKeyParams, GetGroupByKeyUseCase};
use crate::domain::logger::Logger;

pub struct GetGroupByKeyUseCaseImpl {
    pub repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetGroupByKeyUseCase for GetGroupByKeyUseCaseImpl {
    async fn execute(&self, params: GetGroupByKeyParams) -> Result<Group, GroupError> {
        self.logger
            .info(&format!("Fetching group by key: {}", params.key));

        let group = self
            .repository
            .get_by_key(&params.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger.warn(&format!("Group not found: {}", params.key));
                    GroupError::NotFound
                }
                other => GroupError::Repository(other),
            })?;

        Ok(group)
    }
}
