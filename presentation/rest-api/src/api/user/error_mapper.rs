use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            UserError::KeyMissing | UserError::UsernameEmpty | UserError::InvalidEmail => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            UserError::NotFound | UserError::GroupNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            UserError::Repository(e) => {
                tracing::error!(error = %e, "User request failed in storage");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
