use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::group::model::Group;
use crate::domain::group::repository::GroupRepository;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_groups::{GetUserGroupsParams, GetUserGroupsUseCase};

pub struct GetUserGroupsUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub group_repository: Arc<dyn GroupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserGroupsUseCase for GetUserGroupsUseCaseImpl {
    async fn execute(&self, params: GetUserGroupsParams) -> Result<Vec<Group>, UserError> {
        self.logger
            .info(&format!("Fetching groups of user: {}", params.user_key));

        let keys = self.repository.group_keys(&params.user_key).await?;

        let mut groups = Vec::with_capacity(keys.len());
        for key in keys {
            match self.group_repository.get_by_key(&key).await {
                Ok(group) => groups.push(group),
                // Membership entries outlive deleted or unreadable groups.
                Err(RepositoryError::NotFound) | Err(RepositoryError::Decode) => {
                    self.logger
                        .warn(&format!("Skipping stale group {} of user {}", key, params.user_key));
                }
                Err(other) => return Err(UserError::Repository(other)),
            }
        }

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group::changes::GroupChanges;
    use crate::domain::user::model::{User, UserChanges};
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn get_by_key(&self, key: &str) -> Result<User, RepositoryError>;
            async fn exists(&self, key: &str) -> Result<bool, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
            async fn update(&self, key: &str, changes: &UserChanges) -> Result<(), RepositoryError>;
            async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
            async fn group_keys(&self, user_key: &str) -> Result<Vec<String>, RepositoryError>;
            async fn add_group_key(&self, user_key: &str, group_key: &str) -> Result<(), RepositoryError>;
        }
    }

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

    #[tokio::test]
    async fn should_resolve_member_groups_skipping_stale_keys() {
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_group_keys()
            .withf(|user_key| user_key == "u1")
            .returning(|_| Ok(vec!["g1".to_string(), "gone".to_string()]));
        let mut group_repo = MockGroupRepo::new();
        group_repo.expect_get_by_key().returning(|key| match key {
            "g1" => Ok(Group {
                key: "g1".to_string(),
                name: "Picnic".to_string(),
                ..Default::default()
            }),
            _ => Err(RepositoryError::NotFound),
        });

        let use_case = GetUserGroupsUseCaseImpl {
            repository: Arc::new(user_repo),
            group_repository: Arc::new(group_repo),
            logger: mock_logger(),
        };

        let groups = use_case
            .execute(GetUserGroupsParams {
                user_key: "u1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Picnic");
    }

    #[tokio::test]
    async fn should_fail_on_storage_error() {
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_group_keys()
            .returning(|_| Ok(vec!["g1".to_string()]));
        let mut group_repo = MockGroupRepo::new();
        group_repo
            .expect_get_by_key()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetUserGroupsUseCaseImpl {
            repository: Arc::new(user_repo),
            group_repository: Arc::new(group_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUserGroupsParams {
                user_key: "u1".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::Repository(_)));
    }
}
