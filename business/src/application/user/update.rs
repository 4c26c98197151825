use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{User, UserChanges};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};

pub struct UpdateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserUseCase for UpdateUserUseCaseImpl {
    async fn execute(&self, params: UpdateUserParams) -> Result<User, UserError> {
        self.logger.info(&format!("Updating user: {}", params.key));

        let mut user = self
            .repository
            .get_by_key(&params.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        let changes = UserChanges {
            username: params.username,
            email: params.email.map(|email| email.trim().to_string()),
            profile_image_url: params.profile_image_url,
        };
        changes.apply_to(&mut user);
        user.validate()?;

        if !changes.is_empty() {
            self.repository.update(&params.key, &changes).await?;
        }

        self.logger.info(&format!("User updated: {}", user.key));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn stored_user() -> User {
        User {
            key: "u1".to_string(),
            username: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn should_write_only_changed_fields() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_key().returning(|_| Ok(stored_user()));
        mock_repo.expect_save().never();
        mock_repo
            .expect_update()
            .withf(|key, changes| {
                key == "u1"
                    && *changes
                        == UserChanges {
                            username: Some("Dana L".to_string()),
                            ..Default::default()
                        }
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdateUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(UpdateUserParams {
                key: "u1".to_string(),
                username: Some("Dana L".to_string()),
                email: None,
                profile_image_url: None,
            })
            .await
            .unwrap();

        assert_eq!(user.username, "Dana L");
        assert_eq!(user.email, "dana@example.com");
    }

    #[tokio::test]
    async fn should_reject_blank_username() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_key().returning(|_| Ok(stored_user()));
        mock_repo.expect_update().never();

        let use_case = UpdateUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateUserParams {
                key: "u1".to_string(),
                username: Some("".to_string()),
                email: None,
                profile_image_url: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::UsernameEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_key()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateUserParams {
                key: "ghost".to_string(),
                username: None,
                email: None,
                profile_image_url: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
