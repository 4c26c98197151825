use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;
use crate::domain::group::repository::GroupRepository;
use crate::domain::group::use_cases::get_public::GetPublicGroupsUseCase;
use crate::domain::logger::Logger;

pub struct GetPublicGroupsUseCaseImpl {
    pub repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPublicGroupsUseCase for GetPublicGroupsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Group>, GroupError> {
        self.logger.info("Fetching public groups");

        let groups: Vec<Group> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(Group::can_add)
            .collect();

        self.logger
            .debug(&format!("Fetched {} public groups", groups.len()));
        Ok(groups)
    }
}
