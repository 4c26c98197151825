use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;
use crate::domain::group::repository::GroupRepository;
use crate::domain::group::use_cases::get_all::GetAllGroupsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllGroupsUseCaseImpl {
    pub repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllGroupsUseCase for GetAllGroupsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Group>, GroupError> {
        self.logger.info("Fetching all groups");

        let groups = self.repository.get_all().await?;

        self.logger.debug(&format!("Fetched {} groups", groups.len()));
        Ok(groups)
    }
}
