use super::date_time::GroupDateTime;
use super::errors::GroupError;
use super::model::Group;
use super::value_objects::GroupType;

/// Assembles a [`Group`] from individual fields.
///
/// Setters can be called in any order and any number of times; the last
/// value wins. Building consumes the builder, so clone it first if the same
/// draft has to produce more than one group.
#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    group: Group,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.group.name = name.into();
        self
    }

    pub fn admin(mut self, admin_key: impl Into<String>) -> Self {
        self.group.admin_key = admin_key.into();
        self
    }

    pub fn group_type(mut self, group_type: GroupType) -> Self {
        self.group.group_type = group_type;
        self
    }

    pub fn creation_time(mut self, timestamp: impl Into<String>) -> Self {
        self.group.created_at = timestamp.into();
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.group.price = price.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.group.location = location.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.group.description = description.into();
        self
    }

    pub fn date_time(mut self, date_time: &GroupDateTime) -> Self {
        self.group.set_date_time(date_time);
        self
    }

    /// Returns the group as assembled, without any checks.
    pub fn build(self) -> Group {
        self.group
    }

    /// Returns the group once it passes [`Group::validate`].
    pub fn try_build(self) -> Result<Group, GroupError> {
        self.group.validate()?;
        Ok(self.group)
    }
}
