use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::message::errors::MessageError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MessageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MessageError::TextEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "message.text_empty",
            ),
            MessageError::GroupKeyMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "message.group_key_missing",
            ),
            MessageError::GroupNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "message.group_not_found",
            ),
            MessageError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
