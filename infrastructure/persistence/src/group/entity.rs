use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use business::domain::errors::RepositoryError;
use business::domain::group::changes::GroupChanges;
use business::domain::group::model::Group;
use business::domain::group::value_objects::GroupType;

/// Shape of a document under `Groups/{key}`, shared with the mobile client.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupEntity {
    pub group_key: String,
    pub group_name: String,
    pub admin_key: String,
    pub group_type: i64,
    /// Written for clients that read it; ignored when loading.
    pub can_add: bool,
    pub created_at: String,
    pub group_price: String,
    pub group_location: String,
    pub group_days: String,
    pub group_months: String,
    pub group_years: String,
    pub group_hours: String,
    pub group_description: String,
    pub friend_keys: HashMap<String, Value>,
    pub coming_keys: HashMap<String, Value>,
    pub message_keys: HashMap<String, Value>,
    // Older clients wrote these maps capitalized, sometimes next to the
    // camelCase ones. Read both, write only camelCase.
    #[serde(rename = "FriendKeys", skip_serializing)]
    pub legacy_friend_keys: HashMap<String, Value>,
    #[serde(rename = "ComingKeys", skip_serializing)]
    pub legacy_coming_keys: HashMap<String, Value>,
    #[serde(rename = "MessageKeys", skip_serializing)]
    pub legacy_message_keys: HashMap<String, Value>,
}

/// Legacy entries first, so a key present in both spellings keeps the
/// camelCase value.
fn merge_keys(
    legacy: HashMap<String, Value>,
    current: HashMap<String, Value>,
) -> HashMap<String, Value> {
    let mut merged = legacy;
    merged.extend(current);
    merged
}

impl GroupEntity {
    pub fn from_domain(group: &Group) -> Self {
        Self {
            group_key: group.key.clone(),
            group_name: group.name.clone(),
            admin_key: group.admin_key.clone(),
            group_type: group.group_type.code(),
            can_add: group.can_add(),
            created_at: group.created_at.clone(),
            group_price: group.price.clone(),
            group_location: group.location.clone(),
            group_days: group.day.clone(),
            group_months: group.month.clone(),
            group_years: group.year.clone(),
            group_hours: group.time.clone(),
            group_description: group.description.clone(),
            friend_keys: group.friend_keys.clone(),
            coming_keys: group.coming_keys.clone(),
            message_keys: group.message_keys.clone(),
            ..Default::default()
        }
    }

    /// Database fields for a partial update. `groupType` and `canAdd` always
    /// travel together so the stored flag cannot drift from the type.
    pub fn changed_fields(changes: &GroupChanges) -> Map<String, Value> {
        let mut fields = Map::new();
        let mut put = |name: &str, value: Value| {
            fields.insert(name.to_string(), value);
        };

        if let Some(name) = &changes.name {
            put("groupName", Value::from(name.as_str()));
        }
        if let Some(group_type) = changes.group_type {
            put("groupType", Value::from(group_type.code()));
            put("canAdd", Value::from(group_type.allows_adding()));
        }
        if let Some(price) = &changes.price {
            put("groupPrice", Value::from(price.as_str()));
        }
        if let Some(location) = &changes.location {
            put("groupLocation", Value::from(location.as_str()));
        }
        if let Some(description) = &changes.description {
            put("groupDescription", Value::from(description.as_str()));
        }
        if let Some(date_time) = &changes.date_time {
            put("groupDays", Value::from(date_time.day()));
            put("groupMonths", Value::from(date_time.month()));
            put("groupYears", Value::from(date_time.year()));
            put("groupHours", Value::from(date_time.time()));
        }

        fields
    }

    /// `key` is the path segment the document was stored under; it wins over
    /// an empty `groupKey` field.
    pub fn into_domain(self, key: &str) -> Result<Group, RepositoryError> {
        let group_type = GroupType::try_from(self.group_type).map_err(|_| RepositoryError::Decode)?;
        let key = if self.group_key.is_empty() {
            key.to_string()
        } else {
            self.group_key
        };

        Ok(Group {
            key,
            name: self.group_name,
            admin_key: self.admin_key,
            group_type,
            created_at: self.created_at,
            price: self.group_price,
            location: self.group_location,
            day: self.group_days,
            month: self.group_months,
            year: self.group_years,
            time: self.group_hours,
            description: self.group_description,
            friend_keys: merge_keys(self.legacy_friend_keys, self.friend_keys),
            coming_keys: merge_keys(self.legacy_coming_keys, self.coming_keys),
            message_keys: merge_keys(self.legacy_message_keys, self.message_keys),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::group::date_time::GroupDateTime;
    use serde_json::json;

    #[test]
    fn should_write_client_field_names_and_derived_can_add() {
        let group = Group {
            key: "g1".to_string(),
            name: "Picnic".to_string(),
            group_type: GroupType::Private,
            time: "18:00".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(GroupEntity::from_domain(&group)).unwrap();

        assert_eq!(value["groupKey"], "g1");
        assert_eq!(value["groupName"], "Picnic");
        assert_eq!(value["groupType"], 1);
        assert_eq!(value["canAdd"], false);
        assert_eq!(value["groupHours"], "18:00");
    }

    #[test]
    fn should_ignore_stored_can_add_when_loading() {
        let entity: GroupEntity = serde_json::from_value(json!({
            "groupName": "Picnic",
            "groupType": 0,
            "canAdd": false
        }))
        .unwrap();

        let group = entity.into_domain("g1").unwrap();

        assert!(group.can_add());
    }

    #[test]
    fn should_fill_missing_fields_and_use_path_key() {
        let entity: GroupEntity = serde_json::from_value(json!({
            "groupName": "Picnic",
            "FriendKeys": {"user1": "true"}
        }))
        .unwrap();

        let group = entity.into_domain("from-path").unwrap();

        assert_eq!(group.key, "from-path");
        assert_eq!(group.location, "");
        assert_eq!(group.friend_keys.get("user1"), Some(&json!("true")));
    }

    #[test]
    fn should_merge_both_spellings_of_key_maps() {
        let entity: GroupEntity = serde_json::from_value(json!({
            "groupName": "Picnic",
            "friendKeys": {"u1": true, "shared": "new"},
            "FriendKeys": {"u2": true, "shared": "old"},
            "MessageKeys": {"m1": true}
        }))
        .unwrap();

        let group = entity.into_domain("g1").unwrap();

        assert_eq!(group.friend_keys.len(), 3);
        assert_eq!(group.friend_keys.get("shared"), Some(&json!("new")));
        assert!(group.message_keys.contains_key("m1"));
    }

    #[test]
    fn should_write_only_camel_case_key_maps() {
        let mut group = Group::default();
        group.coming_keys.insert("u1".to_string(), json!(true));

        let value = serde_json::to_value(GroupEntity::from_domain(&group)).unwrap();

        assert_eq!(value["comingKeys"], json!({"u1": true}));
        assert!(value.get("ComingKeys").is_none());
    }

    #[test]
    fn should_send_type_and_can_add_together() {
        let changes = GroupChanges {
            group_type: Some(GroupType::Private),
            date_time: Some(GroupDateTime::new("2", "8", "2025", "19:00")),
            ..Default::default()
        };

        let fields = GroupEntity::changed_fields(&changes);

        assert_eq!(fields["groupType"], json!(1));
        assert_eq!(fields["canAdd"], json!(false));
        assert_eq!(fields["groupHours"], json!("19:00"));
        assert!(!fields.contains_key("groupName"));
        assert!(!fields.contains_key("messageKeys"));
    }

    #[test]
    fn should_reject_unknown_group_type() {
        let entity = GroupEntity {
            group_type: 5,
            ..Default::default()
        };

        assert!(matches!(
            entity.into_domain("g1"),
            Err(RepositoryError::Decode)
        ));
    }
}
