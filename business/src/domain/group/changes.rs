use super::date_time::GroupDateTime;
use super::model::Group;
use super::value_objects::GroupType;

/// Fields an update touches; `None` leaves the stored value alone.
///
/// Member and message key maps are never part of an update, they are
/// written by other flows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupChanges {
    pub name: Option<String>,
    pub group_type: Option<GroupType>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<GroupDateTime>,
}

impl GroupChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, group: &mut Group) {
        if let Some(name) = &self.name {
            group.name = name.clone();
        }
        if let Some(group_type) = self.group_type {
            group.group_type = group_type;
        }
        if let Some(price) = &self.price {
            group.price = price.clone();
        }
        if let Some(location) = &self.location {
            group.location = location.clone();
        }
        if let Some(description) = &self.description {
            group.description = description.clone();
        }
        if let Some(date_time) = &self.date_time {
            group.set_date_time(date_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_apply_only_present_fields() {
        let mut group = Group {
            name: "Picnic".to_string(),
            location: "Park".to_string(),
            ..Default::default()
        };
        group.message_keys.insert("m1".to_string(), json!(true));

        let changes = GroupChanges {
            location: Some("Beach".to_string()),
            group_type: Some(GroupType::Private),
            ..Default::default()
        };
        changes.apply_to(&mut group);

        assert_eq!(group.name, "Picnic");
        assert_eq!(group.location, "Beach");
        assert!(!group.can_add());
        assert_eq!(group.message_keys.len(), 1);
    }

    #[test]
    fn should_report_empty_when_nothing_set() {
        assert!(GroupChanges::default().is_empty());
        assert!(
            !GroupChanges {
                price: Some("5".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
