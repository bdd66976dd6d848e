use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use listkeeper_domain::DomainError;
use tracing::error;

/// Plain-text error response. Client errors echo the domain message; I/O
/// failures are logged and reported generically.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidListType(_)
            | DomainError::MalformedRequest(_)
            | DomainError::MissingFilePart(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::ListFileNotFound(_) => {
                (StatusCode::NOT_FOUND, "List file not found".to_string())
            }

            DomainError::IoError(detail) => {
                error!(error = %detail, "List storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access list file".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
