use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use business::domain::errors::RepositoryError;
use business::domain::group::changes::GroupChanges;
use business::domain::group::model::Group;
use business::domain::group::repository::GroupRepository;

use super::entity::GroupEntity;
use crate::db::{DatabaseError, FirebaseDatabase, is_valid_key};

const GROUPS: &str = "Groups";

pub struct GroupRepositoryFirebase {
    database: Arc<FirebaseDatabase>,
}

impl GroupRepositoryFirebase {
    pub fn new(database: Arc<FirebaseDatabase>) -> Self {
        Self { database }
    }
}

fn group_path(key: &str) -> String {
    format!("{GROUPS}/{key}")
}

fn database_error(e: DatabaseError) -> RepositoryError {
    tracing::error!(error = %e, "Group storage failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl GroupRepository for GroupRepositoryFirebase {
    async fn get_all(&self) -> Result<Vec<Group>, RepositoryError> {
        let Some(Value::Object(children)) = self.database.get(GROUPS).await.map_err(database_error)?
        else {
            return Ok(Vec::new());
        };

        let groups = children
            .into_iter()
            .filter_map(|(key, value)| {
                match serde_json::from_value::<GroupEntity>(value)
                    .map_err(|_| RepositoryError::Decode)
                    .and_then(|entity| entity.into_domain(&key))
                {
                    Ok(group) => Some(group),
                    Err(e) => {
                        tracing::warn!(key = %key, error = %e, "Skipping undecodable group");
                        None
                    }
                }
            })
            .collect();

        Ok(groups)
    }

    async fn get_by_key(&self, key: &str) -> Result<Group, RepositoryError> {
        if !is_valid_key(key) {
            return Err(RepositoryError::NotFound);
        }

        let value = self
            .database
            .get(&group_path(key))
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        let entity: GroupEntity =
            serde_json::from_value(value).map_err(|_| RepositoryError::Decode)?;
        entity.into_domain(key)
    }

    async fn exists(&self, key: &str) -> Result<bool, RepositoryError> {
        if !is_valid_key(key) {
            return Ok(false);
        }

        self.database
            .exists(&group_path(key))
            .await
            .map_err(database_error)
    }

    async fn save(&self, group: &Group) -> Result<(), RepositoryError> {
        if !is_valid_key(&group.key) {
            return Err(RepositoryError::Persistence);
        }

        self.database
            .set(&group_path(&group.key), &GroupEntity::from_domain(group))
            .await
            .map_err(database_error)
    }

    async fn update(&self, key: &str, changes: &GroupChanges) -> Result<(), RepositoryError> {
        if !is_valid_key(key) {
            return Err(RepositoryError::NotFound);
        }

        let fields = GroupEntity::changed_fields(changes);
        if fields.is_empty() {
            return Ok(());
        }

        self.database
            .update(&group_path(key), &fields)
            .await
            .map_err(database_error)
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        if !is_valid_key(key) {
            return Err(RepositoryError::NotFound);
        }

        self.database
            .delete(&group_path(key))
            .await
            .map_err(database_error)
    }

    async fn add_message_key(
        &self,
        group_key: &str,
        message_key: &str,
    ) -> Result<(), RepositoryError> {
        if !is_valid_key(group_key) || !is_valid_key(message_key) {
            return Err(RepositoryError::Persistence);
        }

        let mut updates = Map::new();
        updates.insert(message_key.to_string(), Value::Bool(true));

        self.database
            .update(&format!("{}/messageKeys", group_path(group_key)), &updates)
            .await
            .map_err(database_error)
    }
}
