use async_trait::async_trait;

use crate::domain::group::date_time::GroupDateTime;
use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;
use crate::domain::group::value_objects::GroupType;

pub struct CreateGroupParams {
    pub name: String,
    pub admin_key: String,
    pub group_type: GroupType,
    pub price: Option<String>,
    pub location: String,
    pub description: Option<String>,
    pub date_time: GroupDateTime,
    /// Creation timestamp; the current time is used when absent.
    pub created_at: Option<String>,
}

#[async_trait]
pub trait CreateGroupUseCase: Send + Sync {
    async fn execute(&self, params: CreateGroupParams) -> Result<Group, GroupError>;
}
