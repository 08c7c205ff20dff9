use axum::http::StatusCode;

use crate::model::api::{ErrorResponseDto, FieldErrorDto};

/// Stable error categories exposed to clients.
///
/// Clients branch on `code` and `error`; both are part of the API contract and
/// must not change once released. Messages are free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingParameter,
    TypeMismatch,
    EmptyObject,
    InvalidJson,
    InvalidRequest,
    ValidationFailed,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl ErrorKind {
    /// Application error code matching `E\d{3}`.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingParameter => "E001",
            Self::TypeMismatch => "E002",
            Self::EmptyObject => "E003",
            Self::InvalidJson => "E004",
            Self::InvalidRequest => "E005",
            Self::ValidationFailed => "E006",
            Self::Unauthorized => "E401",
            Self::Forbidden => "E403",
            Self::NotFound => "E404",
            Self::MethodNotAllowed => "E405",
            Self::InternalServerError => "E500",
        }
    }

    /// Symbolic category name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::EmptyObject => "EMPTY_OBJECT",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::MissingParameter
            | Self::TypeMismatch
            | Self::EmptyObject
            | Self::InvalidJson
            | Self::InvalidRequest
            | Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the wire-level error body for this category.
    ///
    /// # Arguments
    /// - `message` - Human-readable description of the failure
    /// - `errors` - Field-level details in report order; omitted from JSON when empty
    pub fn to_response(
        self,
        message: impl Into<String>,
        errors: Vec<FieldErrorDto>,
    ) -> ErrorResponseDto {
        ErrorResponseDto {
            status: self.status().as_u16(),
            code: self.code().to_string(),
            error: self.as_str().to_string(),
            message: message.into(),
            errors,
        }
    }
}
