use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::group::model::Group;
use business::domain::group::use_cases::create::{CreateGroupParams, CreateGroupUseCase};
use business::domain::group::use_cases::delete::{DeleteGroupParams, DeleteGroupUseCase};
use business::domain::group::use_cases::get_all::GetAllGroupsUseCase;
use business::domain::group::use_cases::get_by_key::{GetGroupByKeyParams, GetGroupByKeyUseCase};
use business::domain::group::use_cases::get_public::GetPublicGroupsUseCase;
use business::domain::group::use_cases::update::{UpdateGroupParams, UpdateGroupUseCase};
use business::domain::group::value_objects::GroupType;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::group::dto::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};
use crate::api::tags::ApiTags;

pub struct GroupApi {
    create_use_case: Arc<dyn CreateGroupUseCase>,
    get_all_use_case: Arc<dyn GetAllGroupsUseCase>,
    get_public_use_case: Arc<dyn GetPublicGroupsUseCase>,
    get_by_key_use_case: Arc<dyn GetGroupByKeyUseCase>,
    update_use_case: Arc<dyn UpdateGroupUseCase>,
    delete_use_case: Arc<dyn DeleteGroupUseCase>,
}

impl GroupApi {
    pub fn new(
        create_use_case: Arc<dyn CreateGroupUseCase>,
        get_all_use_case: Arc<dyn GetAllGroupsUseCase>,
        get_public_use_case: Arc<dyn GetPublicGroupsUseCase>,
        get_by_key_use_case: Arc<dyn GetGroupByKeyUseCase>,
        update_use_case: Arc<dyn UpdateGroupUseCase>,
        delete_use_case: Arc<dyn DeleteGroupUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_public_use_case,
            get_by_key_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn to_responses(groups: Vec<Group>) -> Vec<GroupResponse> {
    groups.into_iter().map(GroupResponse::from).collect()
}

/// Party group management API
#[OpenApi]
impl GroupApi {
    /// List all groups
    #[oai(path = "/groups", method = "get", tag = "ApiTags::Groups")]
    async fn get_all(&self) -> GroupListResponse {
        match self.get_all_use_case.execute().await {
            Ok(groups) => GroupListResponse::Ok(Json(to_responses(groups))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GroupListResponse::InternalError(json)
            }
        }
    }

    /// List public groups
    ///
    /// Returns only groups whose members may add other people.
    #[oai(path = "/groups/public", method = "get", tag = "ApiTags::Groups")]
    async fn get_public(&self) -> GroupListResponse {
        match self.get_public_use_case.execute().await {
            Ok(groups) => GroupListResponse::Ok(Json(to_responses(groups))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GroupListResponse::InternalError(json)
            }
        }
    }

    /// Create a group
    #[oai(path = "/groups", method = "post", tag = "ApiTags::Groups")]
    async fn create(&self, body: Json<CreateGroupRequest>) -> CreateGroupResponse {
        let request = body.0;
        let group_type = match request.group_type.parse::<GroupType>() {
            Ok(group_type) => group_type,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CreateGroupResponse::BadRequest(json);
            }
        };

        let params = CreateGroupParams {
            name: request.name,
            admin_key: request.admin_key,
            group_type,
            price: request.price,
            location: request.location,
            description: request.description,
            date_time: request.date_time.into(),
            created_at: request.created_at,
        };

        match self.create_use_case.execute(params).await {
            Ok(group) => CreateGroupResponse::Created(Json(group.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateGroupResponse::BadRequest(json),
                    _ => CreateGroupResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a group by key
    #[oai(path = "/groups/:key", method = "get", tag = "ApiTags::Groups")]
    async fn get_by_key(&self, key: Path<String>) -> GetGroupResponse {
        match self
            .get_by_key_use_case
            .execute(GetGroupByKeyParams { key: key.0 })
            .await
        {
            Ok(group) => GetGroupResponse::Ok(Json(group.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetGroupResponse::NotFound(json),
                    _ => GetGroupResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a group
    ///
    /// Only the fields present in the body change. Changing `group_type`
    /// changes `can_add` with it.
    #[oai(path = "/groups/:key", method = "put", tag = "ApiTags::Groups")]
    async fn update(&self, key: Path<String>, body: Json<UpdateGroupRequest>) -> UpdateGroupResponse {
        let request = body.0;
        let group_type = match request.group_type.as_deref().map(str::parse::<GroupType>).transpose() {
            Ok(group_type) => group_type,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return UpdateGroupResponse::BadRequest(json);
            }
        };

        let params = UpdateGroupParams {
            key: key.0,
            name: request.name,
            group_type,
            price: request.price,
            location: request.location,
            description: request.description,
            date_time: request.date_time.map(Into::into),
        };

        match self.update_use_case.execute(params).await {
            Ok(group) => UpdateGroupResponse::Ok(Json(group.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateGroupResponse::BadRequest(json),
                    404 => UpdateGroupResponse::NotFound(json),
                    _ => UpdateGroupResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a group
    #[oai(path = "/groups/:key", method = "delete", tag = "ApiTags::Groups")]
    async fn delete(&self, key: Path<String>) -> DeleteGroupResponse {
        match self
            .delete_use_case
            .execute(DeleteGroupParams { key: key.0 })
            .await
        {
            Ok(()) => DeleteGroupResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteGroupResponse::NotFound(json),
                    _ => DeleteGroupResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GroupListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<GroupResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateGroupResponse {
    #[oai(status = 201)]
    Created(Json<GroupResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetGroupResponse {
    #[oai(status = 200)]
    Ok(Json<GroupResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateGroupResponse {
    #[oai(status = 200)]
    Ok(Json<GroupResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteGroupResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::group::errors::GroupError;
    use mockall::mock;

    use crate::api::group::dto::DateTimeDto;

    mock! {
        pub Create {}

        #[async_trait]
        impl CreateGroupUseCase for Create {
            async fn execute(&self, params: CreateGroupParams) -> Result<Group, GroupError>;
        }
    }

    mock! {
        pub GetAll {}

        #[async_trait]
        impl GetAllGroupsUseCase for GetAll {
            async fn execute(&self) -> Result<Vec<Group>, GroupError>;
        }
    }

    mock! {
        pub GetPublic {}

        #[async_trait]
        impl GetPublicGroupsUseCase for GetPublic {
            async fn execute(&self) -> Result<Vec<Group>, GroupError>;
        }
    }

    mock! {
        pub GetByKey {}

        #[async_trait]
        impl GetGroupByKeyUseCase for GetByKey {
            async fn execute(&self, params: GetGroupByKeyParams) -> Result<Group, GroupError>;
        }
    }

    mock! {
        pub Update {}

        #[async_trait]
        impl UpdateGroupUseCase for Update {
            async fn execute(&self, params: UpdateGroupParams) -> Result<Group, GroupError>;
        }
    }

    mock! {
        pub Delete {}

        #[async_trait]
        impl DeleteGroupUseCase for Delete {
            async fn execute(&self, params: DeleteGroupParams) -> Result<(), GroupError>;
        }
    }

    struct Mocks {
        create: MockCreate,
        get_by_key: MockGetByKey,
        update: MockUpdate,
        delete: MockDelete,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                create: MockCreate::new(),
                get_by_key: MockGetByKey::new(),
                update: MockUpdate::new(),
                delete: MockDelete::new(),
            }
        }

        fn into_api(self) -> GroupApi {
            GroupApi::new(
                Arc::new(self.create),
                Arc::new(MockGetAll::new()),
                Arc::new(MockGetPublic::new()),
                Arc::new(self.get_by_key),
                Arc::new(self.update),
                Arc::new(self.delete),
            )
        }
    }

    fn create_request(group_type: &str) -> CreateGroupRequest {
        CreateGroupRequest {
            name: "Birthday Bash".to_string(),
            admin_key: "admin".to_string(),
            group_type: group_type.to_string(),
            price: None,
            location: "Haifa".to_string(),
            description: None,
            date_time: DateTimeDto {
                day: "1".to_string(),
                month: "8".to_string(),
                year: "2025".to_string(),
                time: "21:00".to_string(),
            },
            created_at: None,
        }
    }

    #[tokio::test]
    async fn should_create_group_from_request() {
        let mut mocks = Mocks::new();
        mocks
            .create
            .expect_execute()
            .withf(|p| p.group_type == GroupType::Private && p.date_time.time() == "21:00")
            .times(1)
            .returning(|p| {
                Ok(Group {
                    key: "g1".to_string(),
                    name: p.name,
                    group_type: p.group_type,
                    ..Default::default()
                })
            });

        let response = mocks.into_api().create(Json(create_request("private"))).await;

        match response {
            CreateGroupResponse::Created(Json(group)) => {
                assert_eq!(group.key, "g1");
                assert!(!group.can_add);
            }
            _ => panic!("expected Created"),
        }
    }

    #[tokio::test]
    async fn should_reject_unknown_group_type_before_use_case() {
        let mut mocks = Mocks::new();
        mocks.create.expect_execute().never();

        let response = mocks.into_api().create(Json(create_request("secret"))).await;

        assert!(matches!(response, CreateGroupResponse::BadRequest(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_group() {
        let mut mocks = Mocks::new();
        mocks
            .get_by_key
            .expect_execute()
            .returning(|_| Err(GroupError::NotFound));

        let response = mocks.into_api().get_by_key(Path("missing".to_string())).await;

        assert!(matches!(response, GetGroupResponse::NotFound(_)));
    }

    #[tokio::test]
    async fn should_pass_only_present_fields_to_update() {
        let mut mocks = Mocks::new();
        mocks
            .update
            .expect_execute()
            .withf(|p| {
                p.key == "g1"
                    && p.group_type == Some(GroupType::Public)
                    && p.name.is_none()
                    && p.date_time.is_none()
            })
            .returning(|p| {
                Ok(Group {
                    key: p.key,
                    group_type: GroupType::Public,
                    ..Default::default()
                })
            });

        let response = mocks
            .into_api()
            .update(
                Path("g1".to_string()),
                Json(UpdateGroupRequest {
                    name: None,
                    group_type: Some("public".to_string()),
                    price: None,
                    location: None,
                    description: None,
                    date_time: None,
                }),
            )
            .await;

        match response {
            UpdateGroupResponse::Ok(Json(group)) => assert!(group.can_add),
            _ => panic!("expected Ok"),
        }
    }

    #[tokio::test]
    async fn should_map_storage_failure_on_delete() {
        let mut mocks = Mocks::new();
        mocks
            .delete
            .expect_execute()
            .returning(|_| Err(GroupError::Repository(RepositoryError::DatabaseError)));

        let response = mocks.into_api().delete(Path("g1".to_string())).await;

        assert!(matches!(response, DeleteGroupResponse::InternalError(_)));
    }
}
