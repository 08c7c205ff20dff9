use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorResponseDto {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Application error code, `E` followed by three digits.
    pub code: String,
    /// Symbolic error category such as `VALIDATION_FAILED`.
    pub error: String,
    pub message: String,
    /// Field-level details in report order; omitted when there are none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}
