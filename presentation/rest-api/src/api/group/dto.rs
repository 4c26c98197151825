use poem_openapi::Object;

use business::domain::group::date_time::GroupDateTime;
use business::domain::group::model::Group;

#[derive(Debug, Clone, Object)]
pub struct DateTimeDto {
    pub day: String,
    pub month: String,
    pub year: String,
    /// Time of day as entered, e.g. "20:30"
    pub time: String,
}

impl From<DateTimeDto> for GroupDateTime {
    fn from(dto: DateTimeDto) -> Self {
        GroupDateTime::new(dto.day, dto.month, dto.year, dto.time)
    }
}

impl From<GroupDateTime> for DateTimeDto {
    fn from(date_time: GroupDateTime) -> Self {
        Self {
            day: date_time.day().to_string(),
            month: date_time.month().to_string(),
            year: date_time.year().to_string(),
            time: date_time.time().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateGroupRequest {
    /// Group name (cannot be empty)
    pub name: String,
    /// Key of the user creating the group
    pub admin_key: String,
    /// "public" or "private"
    pub group_type: String,
    /// Entry price; defaults to "0"
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    pub location: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub date_time: DateTimeDto,
    /// Creation time as sent by the client; server time when absent
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateGroupRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// "public" or "private"
    #[oai(skip_serializing_if_is_none)]
    pub group_type: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub date_time: Option<DateTimeDto>,
}

#[derive(Debug, Clone, Object)]
pub struct GroupResponse {
    pub key: String,
    pub name: String,
    pub admin_key: String,
    pub group_type: String,
    /// Whether members may add people; follows `group_type`
    pub can_add: bool,
    pub created_at: String,
    pub price: String,
    pub location: String,
    pub description: String,
    pub date_time: DateTimeDto,
    pub friend_keys: Vec<String>,
    pub coming_keys: Vec<String>,
    pub message_keys: Vec<String>,
}

fn sorted_keys<V>(map: std::collections::HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<String> = map.into_keys().collect();
    keys.sort();
    keys
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            can_add: group.can_add(),
            group_type: group.group_type.to_string(),
            date_time: group.date_time().into(),
            key: group.key,
            name: group.name,
            admin_key: group.admin_key,
            created_at: group.created_at,
            price: group.price,
            location: group.location,
            description: group.description,
            friend_keys: sorted_keys(group.friend_keys),
            coming_keys: sorted_keys(group.coming_keys),
            message_keys: sorted_keys(group.message_keys),
        }
    }
}
