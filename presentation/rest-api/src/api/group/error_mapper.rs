use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::group::errors::GroupError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GroupError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            GroupError::NameEmpty
            | GroupError::AdminMissing
            | GroupError::InvalidPrice
            | GroupError::InvalidType(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            GroupError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            GroupError::Repository(e) => {
                tracing::error!(error = %e, "Group request failed in storage");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
