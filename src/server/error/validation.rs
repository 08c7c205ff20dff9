use crate::model::api::FieldErrorDto;

/// A single failed field rule, addressed by its path in the request body.
///
/// Paths use the JSON field names, with list elements addressed by index,
/// e.g. `student.fullName` or `courses[2].startDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn into_dto(self) -> FieldErrorDto {
        FieldErrorDto {
            field: self.field,
            message: self.message,
        }
    }
}
