use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::group::changes::GroupChanges;
use crate::domain::group::errors::GroupError;
use crate::domain::group::model::Group;
use crate::domain::group::repository::GroupRepository;
use crate::domain::group::use_cases::update::{UpdateGroupParams, UpdateGroupUseCase};
use crate::domain::logger::Logger;

pub struct UpdateGroupUseCaseImpl {
    pub repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateGroupUseCase for UpdateGroupUseCaseImpl {
    async fn execute(&self, params: UpdateGroupParams) -> Result<Group, GroupError> {
        self.logger.info(&format!("Updating group: {}", params.key));

        let mut group = self
            .repository
            .get_by_key(&params.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => GroupError::NotFound,
                other => GroupError::Repository(other),
            })?;

        let changes = GroupChanges {
            name: params.name,
            group_type: params.group_type,
            price: params.price,
            location: params.location,
            description: params.description,
            date_time: params.date_time,
        };
        changes.apply_to(&mut group);
        group.validate()?;

        if changes.is_empty() {
            self.logger
                .debug(&format!("Nothing to update for group: {}", group.key));
            return Ok(group);
        }

        self.repository.update(&params.key, &changes).await?;

        self.logger.info(&format!("Group updated: {}", group.key));
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group::date_time::GroupDateTime;
    use crate::domain::group::value_objects::GroupType;
    use crate::domain::group::changes::GroupChanges;
    use mockall::mock;

    mock! {
        pub GroupRepo {}

        #[async_trait]
        impl GroupRepository for GroupRepo {
            async fn get_all(&self) -> Result<Vec<Group>, RepositoryError>;
            async fn get_by_key(&self, key: &str) -> Result<Group, RepositoryError>;
            async fn exists(&self, key: &str) -> Result<bool, RepositoryError>;
            async fn save(&self, group: &Group) -> Result<(), RepositoryError>;
            async fn update(&self, key: &str, changes: &GroupChanges) -> Result<(), RepositoryError>;
            async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
            async fn add_message_key(&self, group_key: &str, message_key: &str) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing_group() -> Group {
        Group {
            key: "g1".to_string(),
            name: "Picnic".to_string(),
            admin_key: "admin@example.com".to_string(),
            group_type: GroupType::Public,
            price: "0".to_string(),
            location: "Park".to_string(),
            ..Default::default()
        }
    }

    fn empty_params() -> UpdateGroupParams {
        UpdateGroupParams {
            key: "g1".to_string(),
            name: None,
            group_type: None,
            price: None,
            location: None,
            description: None,
            date_time: None,
        }
    }

    #[tokio::test]
    async fn should_recompute_can_add_when_type_changes() {
        let mut mock_repo = MockGroupRepo::new();
        mock_repo
            .expect_get_by_key()
            .returning(|_| Ok(existing_group()));
        mock_repo
            .expect_update()
            .withf(|key, changes| key == "g1" && changes.group_type == Some(GroupType::Private))
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateGroupUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let group = use_case
            .execute(UpdateGroupParams {
                group_type: Some(GroupType::Private),
                ..empty_params()
            })
            .await
            .unwrap();

        assert_eq!(group.group_type, GroupType::Private);
        assert!(!group.can_add());
    }

    #[tokio::test]
    async fn should_only_change_supplied_fields() {
        let mut mock_repo = MockGroupRepo::new();
        mock_repo
            .expect_get_by_key()
            .returning(|_| Ok(existing_group()));
        mock_repo
            .expect_update()
            .withf(|_, changes| {
                changes.name.is_none()
                    && changes.location.as_deref() == Some("Beach")
                    && changes.date_time.is_some()
            })
            .times(1)
            .returning(|_, _| Ok(()));
        mock_repo.expect_save().never();

        let use_case = UpdateGroupUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let group = use_case
            .execute(UpdateGroupParams {
                location: Some("Beach".to_string()),
                date_time: Some(GroupDateTime::new("2", "8", "2025", "19:00")),
                ..empty_params()
            })
            .await
            .unwrap();

        assert_eq!(group.name, "Picnic");
        assert_eq!(group.location, "Beach");
        assert_eq!(group.month, "8");
        assert_eq!(group.time, "19:00");
    }

    #[tokio::test]
    async fn should_reject_invalid_price_without_saving() {
        let mut mock_repo = MockGroupRepo::new();
        mock_repo
            .expect_get_by_key()
            .returning(|_| Ok(existing_group()));
        mock_repo.expect_update().never();

        let use_case = UpdateGroupUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateGroupParams {
                price: Some("-10".to_string()),
                ..empty_params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), GroupError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_return_not_found_when_group_missing() {
        let mut mock_repo = MockGroupRepo::new();
        mock_repo
            .expect_get_by_key()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateGroupUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(empty_params()).await;

        assert!(matches!(result.unwrap_err(), GroupError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_member_and_message_keys_out_of_the_write() {
        let mut mock_repo = MockGroupRepo::new();
        mock_repo.expect_get_by_key().returning(|_| {
            let mut group = existing_group();
            group
                .message_keys
                .insert("m_old".to_string(), serde_json::json!(true));
            Ok(group)
        });
        mock_repo.expect_save().never();
        mock_repo
            .expect_update()
            .withf(|_, changes| {
                *changes
                    == GroupChanges {
                        name: Some("Renamed".to_string()),
                        ..Default::default()
                    }
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateGroupUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let group = use_case
            .execute(UpdateGroupParams {
                name: Some("Renamed".to_string()),
                ..empty_params()
            })
            .await
            .unwrap();

        assert_eq!(group.name, "Renamed");
        assert!(group.message_keys.contains_key("m_old"));
    }

    #[tokio::test]
    async fn should_skip_write_when_nothing_changes() {
        let mut mock_repo = MockGroupRepo::new();
        mock_repo
            .expect_get_by_key()
            .returning(|_| Ok(existing_group()));
        mock_repo.expect_update().never();

        let use_case = UpdateGroupUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let group = use_case.execute(empty_params()).await.unwrap();

        assert_eq!(group, existing_group());
    }
}
