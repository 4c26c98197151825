use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::group::builder::GroupBuilder;
use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;
use crate::domain::group::repository::GroupRepository;
use crate::domain::group::use_cases::create::{CreateGroupParams, CreateGroupUseCase};
use crate::domain::logger::Logger;

pub struct CreateGroupUseCaseImpl {
    pub repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateGroupUseCase for CreateGroupUseCaseImpl {
    async fn execute(&self, params: CreateGroupParams) -> Result<Group, GroupError> {
        self.logger.info(&format!("Creating group: {}", params.name));

        let created_at = params
            .created_at
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        let mut group = GroupBuilder::new()
            .name(params.name)
            .admin(params.admin_key)
            .group_type(params.group_type)
            .creation_time(created_at)
            .price(params.price.unwrap_or_else(|| "0".to_string()))
            .location(params.location)
            .description(params.description.unwrap_or_default())
            .date_time(&params.date_time)
            .try_build()?;
        group.key = Uuid::new_v4().to_string();

        self.repository.save(&group).await?;

        self.logger.info(&format!("Group created: {}", group.key));
        Ok(group)
    }
}
