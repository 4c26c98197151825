use std::collections::HashMap;

use serde_json::Value;

use super::date_time::GroupDateTime;
use super::errors::GroupError;
use super::value_objects::GroupType;

/// A party group as stored under `Groups/{key}`.
///
/// Whether members may add people is not stored here: it is derived from
/// `group_type` through [`Group::can_add`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub key: String,
    pub name: String,
    pub admin_key: String,
    pub group_type: GroupType,
    pub created_at: String,
    pub price: String,
    pub location: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub time: String,
    pub description: String,
    pub friend_keys: HashMap<String, Value>,
    pub coming_keys: HashMap<String, Value>,
    pub message_keys: HashMap<String, Value>,
}

impl Group {
    pub fn can_add(&self) -> bool {
        self.group_type.allows_adding()
    }

    pub fn date_time(&self) -> GroupDateTime {
        GroupDateTime::new(&self.day, &self.month, &self.year, &self.time)
    }

    pub fn set_date_time(&mut self, date_time: &GroupDateTime) {
        self.day = date_time.day().to_string();
        self.month = date_time.month().to_string();
        self.year = date_time.year().to_string();
        self.time = date_time.time().to_string();
    }

    /// Checks the fields a group needs before it can be persisted.
    ///
    /// An empty price means the party is free.
    pub fn validate(&self) -> Result<(), GroupError> {
        if self.name.trim().is_empty() {
            return Err(GroupError::NameEmpty);
        }
        if self.admin_key.trim().is_empty() {
            return Err(GroupError::AdminMissing);
        }
        let price = self.price.trim();
        if !price.is_empty() {
            match price.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => {}
                _ => return Err(GroupError::InvalidPrice),
            }
        }
        Ok(())
    }
}
