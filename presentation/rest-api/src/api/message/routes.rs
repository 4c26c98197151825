use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::message::use_cases::get_by_group::{
    GetGroupMessagesParams, GetGroupMessagesUseCase,
};
use business::domain::message::use_cases::send::{SendMessageParams, SendMessageUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::message::dto::{MessageResponse, SendMessageRequest};
use crate::api::tags::ApiTags;

pub struct MessageApi {
    get_by_group_use_case: Arc<dyn GetGroupMessagesUseCase>,
    send_use_case: Arc<dyn SendMessageUseCase>,
}

impl MessageApi {
    pub fn new(
        get_by_group_use_case: Arc<dyn GetGroupMessagesUseCase>,
        send_use_case: Arc<dyn SendMessageUseCase>,
    ) -> Self {
        Self {
            get_by_group_use_case,
            send_use_case,
        }
    }
}

/// Group chat API
#[OpenApi]
impl MessageApi {
    /// List a group's messages
    ///
    /// Oldest first.
    #[oai(path = "/groups/:key/messages", method = "get", tag = "ApiTags::Messages")]
    async fn get_by_group(&self, key: Path<String>) -> GetMessagesResponse {
        match self
            .get_by_group_use_case
            .execute(GetGroupMessagesParams { group_key: key.0 })
            .await
        {
            Ok(messages) => GetMessagesResponse::Ok(Json(
                messages.into_iter().map(MessageResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetMessagesResponse::InternalError(json)
            }
        }
    }

    /// Send a message to a group
    #[oai(path = "/groups/:key/messages", method = "post", tag = "ApiTags::Messages")]
    async fn send(&self, key: Path<String>, body: Json<SendMessageRequest>) -> SendMessageResponse {
        let params = SendMessageParams {
            group_key: key.0,
            sender_key: body.0.sender_key,
            sender_name: body.0.sender_name,
            text: body.0.text,
        };

        match self.send_use_case.execute(params).await {
            Ok(message) => SendMessageResponse::Created(Json(message.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SendMessageResponse::BadRequest(json),
                    404 => SendMessageResponse::NotFound(json),
                    _ => SendMessageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMessagesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MessageResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendMessageResponse {
    #[oai(status = 201)]
    Created(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
