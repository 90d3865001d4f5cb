//! Mapping of domain and input errors onto HTTP responses
//!
//! Every failure leaves the API as a [`jb_shared::ErrorResponse`]. Internal
//! errors are logged here and replaced by a generic message.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use validator::ValidationErrors;

use jb_core::errors::{AuthError, DomainError, TokenError};
use jb_shared::{error_codes, ErrorResponse};

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by handlers and extractors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body or query failed field validation
    #[error("Invalid request data")]
    Validation(#[from] ValidationErrors),

    /// Request could not be decoded at all
    #[error("{0}")]
    MalformedInput(String),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl ApiError {
    fn domain_status(error: &DomainError) -> (StatusCode, &'static str) {
        match error {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, error_codes::VALIDATION_ERROR)
            }
            DomainError::Conflict { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::EMAIL_ALREADY_REGISTERED)
            }
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            DomainError::Forbidden { .. } => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
            DomainError::Auth(auth) if auth.is_forbidden() => {
                (StatusCode::FORBIDDEN, error_codes::FORBIDDEN)
            }
            DomainError::Auth(auth) if auth.is_inactive() => {
                (StatusCode::BAD_REQUEST, error_codes::ACCOUNT_INACTIVE)
            }
            DomainError::Auth(AuthError::IncorrectCredentials) => {
                (StatusCode::UNAUTHORIZED, error_codes::INCORRECT_CREDENTIALS)
            }
            DomainError::Auth(_) => (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS),
            DomainError::Token(TokenError::TokenGenerationFailed)
            | DomainError::Token(TokenError::UnsupportedAlgorithm { .. })
            | DomainError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
            DomainError::Token(_) => (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS),
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(error) => {
                let (status, code) = Self::domain_status(error);
                match error {
                    _ if status == StatusCode::INTERNAL_SERVER_ERROR => ErrorResponse::internal(),
                    // Token problems are never described to the client
                    DomainError::Token(_) => ErrorResponse::new(
                        code,
                        AuthError::InvalidCredentials.to_string(),
                    ),
                    DomainError::Validation { message } => ErrorResponse::new(code, message.as_str()),
                    _ => ErrorResponse::new(code, error.to_string()),
                }
            }
            ApiError::Validation(errors) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, self.to_string())
                    .add_detail("fields", errors.field_errors())
            }
            ApiError::MalformedInput(message) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.as_str())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => Self::domain_status(error).0,
            ApiError::Validation(_) | ApiError::MalformedInput(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "Request failed with internal error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let mut response = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(self.body())
    }
}

/// Turns malformed JSON bodies into 422 responses
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedInput(format!("Invalid JSON body: {}", err)).into()
}

/// Turns undecodable query strings into 422 responses
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedInput(format!("Invalid query parameters: {}", err)).into()
}

/// Turns non-numeric path IDs into 422 responses
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedInput(format!("Invalid path parameter: {}", err)).into()
}

/// Turns malformed login forms into 422 responses
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedInput(format!("Invalid form data: {}", err)).into()
}
