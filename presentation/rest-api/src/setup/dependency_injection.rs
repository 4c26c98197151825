use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::FirebaseDatabase;
use persistence::group::repository::GroupRepositoryFirebase;
use persistence::message::repository::MessageRepositoryFirebase;
use persistence::user::repository::UserRepositoryFirebase;

use business::application::group::create::CreateGroupUseCaseImpl;
use business::application::group::delete::DeleteGroupUseCaseImpl;
use business::application::group::get_all::GetAllGroupsUseCaseImpl;
use business::application::group::get_by_key::GetGroupByKeyUseCaseImpl;
use business::application::group::get_public::GetPublicGroupsUseCaseImpl;
use business::application::group::update::UpdateGroupUseCaseImpl;
use business::application::message::get_by_group::GetGroupMessagesUseCaseImpl;
use business::application::message::send::SendMessageUseCaseImpl;
use business::application::user::add_group::AddUserGroupUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_by_key::GetUserByKeyUseCaseImpl;
use business::application::user::get_groups::GetUserGroupsUseCaseImpl;
use business::application::user::save::SaveUserUseCaseImpl;
use business::application::user::update::UpdateUserUseCaseImpl;

use crate::api::group::routes::GroupApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::message::routes::MessageApi;
use crate::api::user::routes::UserApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub group_api: GroupApi,
    pub message_api: MessageApi,
    pub user_api: UserApi,
}

impl DependencyContainer {
    /// Wires every repository and use case around the one shared database handle.
    pub fn new(database: Arc<FirebaseDatabase>) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let group_repository = Arc::new(GroupRepositoryFirebase::new(database.clone()));
        let message_repository = Arc::new(MessageRepositoryFirebase::new(database.clone()));
        let user_repository = Arc::new(UserRepositoryFirebase::new(database));

        // Group use cases
        let create_use_case = Arc::new(CreateGroupUseCaseImpl {
            repository: group_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllGroupsUseCaseImpl {
            repository: group_repository.clone(),
            logger: logger.clone(),
        });
        let get_public_use_case = Arc::new(GetPublicGroupsUseCaseImpl {
            repository: group_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_key_use_case = Arc::new(GetGroupByKeyUseCaseImpl {
            repository: group_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateGroupUseCaseImpl {
            repository: group_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteGroupUseCaseImpl {
            repository: group_repository.clone(),
            logger: logger.clone(),
        });

        // Message use cases
        let get_messages_use_case = Arc::new(GetGroupMessagesUseCaseImpl {
            repository: message_repository.clone(),
            logger: logger.clone(),
        });
        let send_message_use_case = Arc::new(SendMessageUseCaseImpl {
            repository: message_repository,
            group_repository: group_repository.clone(),
            logger: logger.clone(),
        });

        // User use cases
        let user_api = UserApi::new(
            Arc::new(GetAllUsersUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetUserByKeyUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SaveUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetUserGroupsUseCaseImpl {
                repository: user_repository.clone(),
                group_repository: group_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddUserGroupUseCaseImpl {
                repository: user_repository,
                group_repository,
                logger,
            }),
        );

        let group_api = GroupApi::new(
            create_use_case,
            get_all_use_case,
            get_public_use_case,
            get_by_key_use_case,
            update_use_case,
            delete_use_case,
        );
        let message_api = MessageApi::new(get_messages_use_case, send_message_use_case);

        Self {
            health_api: HealthApi::new(),
            group_api,
            message_api,
            user_api,
        }
    }
}
