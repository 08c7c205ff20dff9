//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the structured `ErrorResponseDto` body. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every variant maps to
//! exactly one `ErrorKind`, which owns the stable `code`/`error`/`status` triple.

pub mod auth;
pub mod config;
pub mod identifier;
pub mod kind;
pub mod validation;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, identifier::IdentifierError, kind::ErrorKind,
    validation::FieldError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Access-control failure, reported as 401 or 403.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Malformed or wrong-length identifier.
    ///
    /// Results in 400 Bad Request with `INVALID_REQUEST`.
    #[error(transparent)]
    IdentifierErr(#[from] IdentifierError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, typically while binding the listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more field rules were violated.
    ///
    /// Always carries at least one field error.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Request body was `{}` where fields were required.
    #[error("Request body must not be an empty object")]
    EmptyObject,

    /// Request body is not syntactically valid JSON.
    #[error("{0}")]
    InvalidJson(String),

    /// A value had the wrong type for its field or parameter.
    #[error("{0}")]
    TypeMismatch(String),

    /// A required parameter or the request body was not supplied.
    #[error("{0}")]
    MissingParameter(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// The route exists but does not accept the request method.
    ///
    /// Results in 405 Method Not Allowed.
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with `INVALID_REQUEST`.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Error category reported to the client for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthErr(err) => err.kind(),
            Self::IdentifierErr(_) | Self::BadRequest(_) => ErrorKind::InvalidRequest,
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::EmptyObject => ErrorKind::EmptyObject,
            Self::InvalidJson(_) => ErrorKind::InvalidJson,
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::MissingParameter(_) => ErrorKind::MissingParameter,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) => ErrorKind::InternalServerError,
        }
    }

    /// Client-facing message; internal details are never exposed.
    fn client_message(&self) -> String {
        match self {
            Self::Validation(_) => "Request validation failed".to_string(),
            Self::InvalidJson(detail) => format!("Malformed JSON request body: {}", detail),
            err if err.kind() == ErrorKind::InternalServerError => {
                "Internal server error".to_string()
            }
            err => err.to_string(),
        }
    }
}

/// Converts application errors into structured JSON error responses.
///
/// Server-side failures are logged at error level with full details while the
/// client receives a generic message. Client errors are logged at debug level.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        if kind == ErrorKind::InternalServerError {
            tracing::error!("{}", self);
        } else {
            tracing::debug!(code = kind.code(), "Request rejected: {}", self);
        }

        let message = self.client_message();
        let errors = match self {
            Self::Validation(errors) => errors.into_iter().map(FieldError::into_dto).collect(),
            _ => Vec::new(),
        };

        (kind.status(), Json(kind.to_response(message, errors))).into_response()
    }
}
