use serde::{Deserialize, Serialize};

use super::errors::GroupError;

/// Visibility of a group. Public groups let members add other people.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    #[default]
    Public,
    Private,
}

impl GroupType {
    /// Numeric code stored by the mobile client (0 = public, 1 = private).
    pub fn code(&self) -> i64 {
        match self {
            GroupType::Public => 0,
            GroupType::Private => 1,
        }
    }

    pub fn allows_adding(&self) -> bool {
        matches!(self, GroupType::Public)
    }
}

impl TryFrom<i64> for GroupType {
    type Error = GroupError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GroupType::Public),
            1 => Ok(GroupType::Private),
            other => Err(GroupError::InvalidType(other.to_string())),
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupType::Public => write!(f, "public"),
            GroupType::Private => write!(f, "private"),
        }
    }
}

impl std::str::FromStr for GroupType {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(GroupType::Public),
            "private" => Ok(GroupType::Private),
            other => Err(GroupError::InvalidType(other.to_string())),
        }
    }
}
