// Translation of store and application failures into HTTP responses.
//
// Mapping
// - not found -> 404
// - already exists, not empty -> 409
// - malformed body or failed validation -> 422

use crate::modules::guests::core::errors::GuestStoreError;
use crate::modules::guests::use_cases::errors::ApplicationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub type HttpResult<T> = Result<T, HttpError>;

impl HttpError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl From<GuestStoreError> for HttpError {
    fn from(error: GuestStoreError) -> Self {
        let status = if error.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::CONFLICT
        };
        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl From<ApplicationError> for HttpError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Store(error) => error.into(),
            ApplicationError::Validation(message) => Self::unprocessable(message),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(rejection.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod http_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GuestStoreError::GuestNotFound(1), StatusCode::NOT_FOUND)]
    #[case(GuestStoreError::PartyNameNotFound("x".into()), StatusCode::NOT_FOUND)]
    #[case(GuestStoreError::PartyNotEmpty(1), StatusCode::CONFLICT)]
    #[case(GuestStoreError::ContactNotEmpty(1), StatusCode::CONFLICT)]
    fn it_should_map_store_errors_to_a_status(#[case] error: GuestStoreError, #[case] status: StatusCode) {
        assert_eq!(HttpError::from(error).status, status);
    }

    #[rstest]
    fn it_should_map_validation_errors_to_unprocessable() {
        let error = HttpError::from(ApplicationError::Validation("party name is required".into()));
        assert_eq!(error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.message, "party name is required");
    }

    #[rstest]
    fn it_should_unwrap_store_errors_carried_by_application_errors() {
        let error = HttpError::from(ApplicationError::Store(GuestStoreError::ContactNotFound(3)));
        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.message, "contact not found: 3");
    }
}
