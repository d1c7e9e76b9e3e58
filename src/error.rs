use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use service::ServiceError;
use tracing::error;

use crate::schemas::ErrorResponse;

/// HTTP wrapper around [`ServiceError`].
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::UserNotFound(_) | ServiceError::AccountNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ServiceError::DuplicateAccount { .. } | ServiceError::DuplicateUser(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NullField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match &self.0 {
            ServiceError::UserNotFound(_) => "USER_NOT_FOUND",
            ServiceError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            ServiceError::DuplicateAccount { .. } => "ACCOUNT_ALREADY_EXISTS",
            ServiceError::DuplicateUser(_) => "USERNAME_ALREADY_EXISTS",
            ServiceError::NullField(_) => "NULL_NOT_ALLOWED",
            ServiceError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let message = match &self.0 {
            ServiceError::Database(db_error) => {
                // Driver details stay in the logs
                error!("Database error while handling request: {}", db_error);
                "Internal database error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            success: false,
        };

        (status, Json(body)).into_response()
    }
}
