use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), UserError> {
        self.logger.info(&format!("Deleting user: {}", params.key));

        if !self.repository.exists(&params.key).await? {
            return Err(UserError::NotFound);
        }
        self.repository.delete(&params.key).await?;

        self.logger.info(&format!("User deleted: {}", params.key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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
    async fn should_delete_existing_user() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists().returning(|_| Ok(true));
        mock_repo
            .expect_delete()
            .withf(|key| key == "u1")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteUserParams {
                key: "u1".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_without_deleting() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_exists().returning(|_| Ok(false));
        mock_repo.expect_delete().never();

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteUserParams {
                key: "ghost".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
