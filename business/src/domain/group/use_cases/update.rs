use async_trait::async_trait;

use crate::domain::group::date_time::GroupDateTime;
use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;
use crate::domain::group::value_objects::GroupType;

pub struct UpdateGroupParams {
    pub key: String,
    pub name: Option<String>,
    pub group_type: Option<GroupType>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<GroupDateTime>,
}

#[async_trait]
pub trait UpdateGroupUseCase: Send + Sync {
    async fn execute(&self, params: UpdateGroupParams) -> Result<Group, GroupError>;
}
