use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Student fields as submitted by clients.
///
/// Every field defaults when absent so that missing values are reported by the
/// validator with a field path rather than as a deserialization failure.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentPayloadDto {
    /// UUID of the student; only meaningful on update.
    pub student_id: Option<String>,
    pub full_name: Option<String>,
    pub furigana: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub age: i32,
    pub gender: Option<String>,
    pub remarks: Option<String>,
}

/// Course enrollment as submitted by clients.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePayloadDto {
    pub course_name: Option<String>,
    /// Format: `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Format: `YYYY-MM-DD`; absent for an ongoing course
    pub end_date: Option<String>,
}

/// Body of the register and update endpoints.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequestDto {
    #[serde(default)]
    pub student: StudentPayloadDto,
    #[serde(default)]
    pub courses: Vec<CoursePayloadDto>,
    /// Desired soft-deletion state; ignored on registration.
    #[serde(default)]
    pub deleted: bool,
    /// When true, submitted courses are added to the existing ones instead of
    /// replacing them.
    #[serde(default)]
    pub append_courses: bool,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub student_id: String,
    pub full_name: String,
    pub furigana: String,
    pub nickname: String,
    pub email: String,
    pub location: Option<String>,
    pub age: i32,
    pub gender: String,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub course_id: String,
    pub student_id: String,
    pub course_name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A student together with its course enrollments.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct StudentDetailDto {
    pub student: StudentDto,
    pub courses: Vec<CourseDto>,
}

/// Query parameters of the student search endpoint.
#[derive(Serialize, Deserialize, IntoParams, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct StudentSearchQueryDto {
    /// Substring that the student's furigana must contain
    pub furigana: Option<String>,
    /// Include soft-deleted students alongside active ones
    pub include_deleted: bool,
    /// Return only soft-deleted students; wins over `includeDeleted`
    pub deleted_only: bool,
}
