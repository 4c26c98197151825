use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::user::use_cases::add_group::{AddUserGroupParams, AddUserGroupUseCase};
use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::GetAllUsersUseCase;
use business::domain::user::use_cases::get_by_key::{GetUserByKeyParams, GetUserByKeyUseCase};
use business::domain::user::use_cases::get_groups::{GetUserGroupsParams, GetUserGroupsUseCase};
use business::domain::user::use_cases::save::{SaveUserParams, SaveUserUseCase};
use business::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::group::dto::GroupResponse;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{SaveUserRequest, UpdateUserRequest, UserResponse};

pub struct UserApi {
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    get_by_key_use_case: Arc<dyn GetUserByKeyUseCase>,
    save_use_case: Arc<dyn SaveUserUseCase>,
    update_use_case: Arc<dyn UpdateUserUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
    get_groups_use_case: Arc<dyn GetUserGroupsUseCase>,
    add_group_use_case: Arc<dyn AddUserGroupUseCase>,
}

impl UserApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        get_by_key_use_case: Arc<dyn GetUserByKeyUseCase>,
        save_use_case: Arc<dyn SaveUserUseCase>,
        update_use_case: Arc<dyn UpdateUserUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
        get_groups_use_case: Arc<dyn GetUserGroupsUseCase>,
        add_group_use_case: Arc<dyn AddUserGroupUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_key_use_case,
            save_use_case,
            update_use_case,
            delete_use_case,
            get_groups_use_case,
            add_group_use_case,
        }
    }
}

/// User directory API
#[OpenApi]
impl UserApi {
    /// List all users
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn get_all(&self) -> UserListResponse {
        match self.get_all_use_case.execute().await {
            Ok(users) => UserListResponse::Ok(Json(users.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UserListResponse::InternalError(json)
            }
        }
    }

    /// Get a user by key
    #[oai(path = "/users/:key", method = "get", tag = "ApiTags::Users")]
    async fn get_by_key(&self, key: Path<String>) -> GetUserResponse {
        match self
            .get_by_key_use_case
            .execute(GetUserByKeyParams { key: key.0 })
            .await
        {
            Ok(user) => GetUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetUserResponse::NotFound(json),
                    _ => GetUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Save a user profile
    ///
    /// Creates the user or overwrites its profile fields. Friend keys
    /// already stored are kept.
    #[oai(path = "/users/:key", method = "post", tag = "ApiTags::Users")]
    async fn save(&self, key: Path<String>, body: Json<SaveUserRequest>) -> SaveUserResponse {
        let request = body.0;
        let params = SaveUserParams {
            key: key.0,
            username: request.username,
            email: request.email,
            profile_image_url: request.profile_image_url,
        };

        match self.save_use_case.execute(params).await {
            Ok(user) => SaveUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SaveUserResponse::BadRequest(json),
                    _ => SaveUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a user profile
    ///
    /// Only the fields present in the body change.
    #[oai(path = "/users/:key", method = "put", tag = "ApiTags::Users")]
    async fn update(&self, key: Path<String>, body: Json<UpdateUserRequest>) -> UpdateUserResponse {
        let request = body.0;
        let params = UpdateUserParams {
            key: key.0,
            username: request.username,
            email: request.email,
            profile_image_url: request.profile_image_url,
        };

        match self.update_use_case.execute(params).await {
            Ok(user) => UpdateUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateUserResponse::BadRequest(json),
                    404 => UpdateUserResponse::NotFound(json),
                    _ => UpdateUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a user
    #[oai(path = "/users/:key", method = "delete", tag = "ApiTags::Users")]
    async fn delete(&self, key: Path<String>) -> DeleteUserResponse {
        match self
            .delete_use_case
            .execute(DeleteUserParams { key: key.0 })
            .await
        {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteUserResponse::NotFound(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }

    /// List the groups a user belongs to
    #[oai(path = "/users/:key/groups", method = "get", tag = "ApiTags::Users")]
    async fn get_groups(&self, key: Path<String>) -> UserGroupsResponse {
        match self
            .get_groups_use_case
            .execute(GetUserGroupsParams { user_key: key.0 })
            .await
        {
            Ok(groups) => {
                UserGroupsResponse::Ok(Json(groups.into_iter().map(GroupResponse::from).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UserGroupsResponse::InternalError(json)
            }
        }
    }

    /// Add a group to a user's group list
    #[oai(path = "/users/:key/groups/:group_key", method = "post", tag = "ApiTags::Users")]
    async fn add_group(&self, key: Path<String>, group_key: Path<String>) -> AddUserGroupResponse {
        let params = AddUserGroupParams {
            user_key: key.0,
            group_key: group_key.0,
        };

        match self.add_group_use_case.execute(params).await {
            Ok(()) => AddUserGroupResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddUserGroupResponse::NotFound(json),
                    _ => AddUserGroupResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UserListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UserGroupsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<GroupResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddUserGroupResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
